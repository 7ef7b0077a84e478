use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Secure,
    Suspicious,
    Unsafe,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Secure => "secure",
            RiskLevel::Suspicious => "suspicious",
            RiskLevel::Unsafe => "unsafe",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Secure => write!(f, "SECURE"),
            RiskLevel::Suspicious => write!(f, "SUSPICIOUS"),
            RiskLevel::Unsafe => write!(f, "UNSAFE"),
        }
    }
}

pub const UNSAFE_THRESHOLD: u32 = 4;
pub const SUSPICIOUS_THRESHOLD: u32 = 2;

pub fn calculate_level(score: u32) -> RiskLevel {
    if score >= UNSAFE_THRESHOLD {
        RiskLevel::Unsafe
    } else if score >= SUSPICIOUS_THRESHOLD {
        RiskLevel::Suspicious
    } else {
        RiskLevel::Secure
    }
}
