use crate::error::OracleError;
use scanlens_core::RemoteRiskResult;
use serde::Deserialize;
use std::time::Duration;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const RISKCHECK_PATH: &str = "/api/riskcheck";

/// Reputation lookup for a single URL.
///
/// Implementations never fail outward: every problem is reported through
/// `RemoteRiskResult::error`.
#[async_trait::async_trait]
pub trait ThreatOracle: Send + Sync {
    async fn check(&self, url: &str) -> RemoteRiskResult;
}

/// Wire shape of a `GET /api/riskcheck` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RiskCheckResponse {
    is_risky: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    checked_domain: Option<String>,
    #[serde(default)]
    found_in_files: Option<Vec<String>>,
    #[serde(default)]
    usom_details: Option<serde_json::Value>,
}

impl From<RiskCheckResponse> for RemoteRiskResult {
    fn from(resp: RiskCheckResponse) -> Self {
        Self {
            is_risky: resp.is_risky,
            message: resp.message,
            checked_domain: resp.checked_domain,
            found_in_files: resp.found_in_files,
            usom_details: resp.usom_details,
            error: None,
        }
    }
}

pub struct HttpThreatOracle {
    client: reqwest::Client,
    base_url: Option<String>,
    timeout: Duration,
}

impl HttpThreatOracle {
    /// `base_url` of `None` is allowed; every check then reports `missing_base_url`.
    pub fn new(base_url: Option<String>) -> Result<Self, OracleError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("scanlens/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url,
            timeout: REQUEST_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self, url: &str) -> Result<String, OracleError> {
        let base = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .ok_or(OracleError::MissingBaseUrl)?;

        let lowered = base.to_ascii_lowercase();
        if !(lowered.starts_with("http://") || lowered.starts_with("https://")) {
            return Err(OracleError::InvalidBaseUrl(base.to_string()));
        }

        Ok(format!(
            "{}{}?url={}",
            base.trim_end_matches('/'),
            RISKCHECK_PATH,
            urlencoding::encode(url)
        ))
    }

    pub async fn try_check(&self, url: &str) -> Result<RemoteRiskResult, OracleError> {
        let endpoint = self.endpoint(url)?;
        tokio::time::timeout(self.timeout, self.fetch(&endpoint))
            .await
            .map_err(|_| OracleError::Timeout(self.timeout))?
    }

    async fn fetch(&self, endpoint: &str) -> Result<RemoteRiskResult, OracleError> {
        let resp = self.client.get(endpoint).send().await?;
        if !resp.status().is_success() {
            return Err(OracleError::HttpStatus {
                status: resp.status().as_u16(),
            });
        }

        let body = resp.bytes().await?;
        let parsed: RiskCheckResponse = serde_json::from_slice(&body)?;
        Ok(parsed.into())
    }
}

#[async_trait::async_trait]
impl ThreatOracle for HttpThreatOracle {
    async fn check(&self, url: &str) -> RemoteRiskResult {
        match self.try_check(url).await {
            Ok(result) => {
                tracing::debug!(url, is_risky = result.is_risky, "oracle verdict");
                result
            }
            Err(OracleError::MissingBaseUrl) => {
                tracing::debug!("oracle not configured; skipping remote check");
                RemoteRiskResult::failed(OracleError::MissingBaseUrl.code())
            }
            Err(e) => {
                tracing::warn!(url, code = e.code(), error = %e, "oracle check failed");
                RemoteRiskResult::failed(e.code())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_encodes_url() {
        let oracle = HttpThreatOracle::new(Some("https://oracle.example/".to_string())).unwrap();
        assert_eq!(
            oracle.endpoint("https://evil.com/a?b=c&d").unwrap(),
            "https://oracle.example/api/riskcheck?url=https%3A%2F%2Fevil.com%2Fa%3Fb%3Dc%26d"
        );
    }

    #[test]
    fn endpoint_requires_http_base() {
        let missing = HttpThreatOracle::new(None).unwrap();
        assert!(matches!(
            missing.endpoint("https://x.com"),
            Err(OracleError::MissingBaseUrl)
        ));

        let blank = HttpThreatOracle::new(Some("  ".to_string())).unwrap();
        assert!(matches!(
            blank.endpoint("https://x.com"),
            Err(OracleError::MissingBaseUrl)
        ));

        let ftp = HttpThreatOracle::new(Some("ftp://oracle.example".to_string())).unwrap();
        assert!(matches!(
            ftp.endpoint("https://x.com"),
            Err(OracleError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn response_tolerates_missing_optionals() {
        let resp: RiskCheckResponse = serde_json::from_str(r#"{"isRisky":false}"#).unwrap();
        let result = RemoteRiskResult::from(resp);
        assert!(!result.is_risky);
        assert!(!result.is_unknown());
        assert_eq!(result.found_in_files, None);
    }
}
