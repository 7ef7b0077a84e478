use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    // Local URL heuristics, in evaluation order
    InsecureHttp,
    Homoglyph,
    Userinfo,
    IpHost,
    SuspiciousKeywords,
    SuspiciousTld,
    UrlShortener,
    NonstandardPort,
    PathEntropy,
    ExecutableDownload,
    BrandImpersonation,

    // Threat oracle
    RemoteBlacklist,
}

impl ReasonCode {
    pub const ALL: &'static [ReasonCode] = &[
        ReasonCode::InsecureHttp,
        ReasonCode::Homoglyph,
        ReasonCode::Userinfo,
        ReasonCode::IpHost,
        ReasonCode::SuspiciousKeywords,
        ReasonCode::SuspiciousTld,
        ReasonCode::UrlShortener,
        ReasonCode::NonstandardPort,
        ReasonCode::PathEntropy,
        ReasonCode::ExecutableDownload,
        ReasonCode::BrandImpersonation,
        ReasonCode::RemoteBlacklist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::InsecureHttp => "insecure_http",
            ReasonCode::Homoglyph => "homoglyph",
            ReasonCode::Userinfo => "userinfo",
            ReasonCode::IpHost => "ip_host",
            ReasonCode::SuspiciousKeywords => "suspicious_keywords",
            ReasonCode::SuspiciousTld => "suspicious_tld",
            ReasonCode::UrlShortener => "url_shortener",
            ReasonCode::NonstandardPort => "nonstandard_port",
            ReasonCode::PathEntropy => "path_entropy",
            ReasonCode::ExecutableDownload => "executable_download",
            ReasonCode::BrandImpersonation => "brand_impersonation",
            ReasonCode::RemoteBlacklist => "remote_blacklist",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Attribution attached when the threat oracle can name its source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceReason {
    Usom {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        checked_domain: Option<String>,
        #[serde(default)]
        details: serde_json::Value,
    },
    Github {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        checked_domain: Option<String>,
        #[serde(default)]
        files: Vec<String>,
    },
}

/// One entry of a result's reason list.
///
/// Codes and notes serialize as bare strings; sources serialize as tagged
/// objects. Display text is resolved by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reason {
    Code(ReasonCode),
    Source(SourceReason),
    Note(String),
}

impl Reason {
    pub fn code(&self) -> Option<ReasonCode> {
        match self {
            Reason::Code(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<ReasonCode> for Reason {
    fn from(code: ReasonCode) -> Self {
        Reason::Code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_serialize_as_their_str() {
        for code in ReasonCode::ALL {
            let json = serde_json::to_string(code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn untagged_reasons_keep_shape() {
        let reasons = vec![
            Reason::Code(ReasonCode::RemoteBlacklist),
            Reason::Note("listed".to_string()),
            Reason::Source(SourceReason::Github {
                checked_domain: Some("evil.com".to_string()),
                files: vec!["list.txt".to_string()],
            }),
        ];
        let value = serde_json::to_value(&reasons).unwrap();
        assert_eq!(value[0], "remote_blacklist");
        assert_eq!(value[1], "listed");
        assert_eq!(value[2]["kind"], "github");
        assert_eq!(value[2]["files"][0], "list.txt");

        let back: Vec<Reason> = serde_json::from_value(value).unwrap();
        assert_eq!(back, reasons);
    }
}
