use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("threat oracle base url is not configured")]
    MissingBaseUrl,

    #[error("invalid threat oracle base url: {0}")]
    InvalidBaseUrl(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("no response within {0:?}")]
    Timeout(Duration),

    #[error("HTTP status error: {status}")]
    HttpStatus { status: u16 },

    #[error("invalid response body: {0}")]
    BadJson(#[from] serde_json::Error),
}

impl OracleError {
    /// Stable code carried in `RemoteRiskResult::error`.
    pub fn code(&self) -> &'static str {
        match self {
            OracleError::MissingBaseUrl => "missing_base_url",
            OracleError::InvalidBaseUrl(_) => "invalid_base_url",
            OracleError::Network(_) => "network",
            OracleError::Timeout(_) => "timeout",
            OracleError::HttpStatus { .. } => "http_status",
            OracleError::BadJson(_) => "bad_json",
        }
    }
}
