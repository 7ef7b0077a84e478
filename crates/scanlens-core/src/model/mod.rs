pub mod reason;

use crate::rules::grade::RiskLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use reason::{Reason, ReasonCode, SourceReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadKind {
    Url,
    Text,
    Wifi,
    Tel,
    Email,
    Sms,
    Geo,
    Vcard,
    Event,
}

impl PayloadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadKind::Url => "url",
            PayloadKind::Text => "text",
            PayloadKind::Wifi => "wifi",
            PayloadKind::Tel => "tel",
            PayloadKind::Email => "email",
            PayloadKind::Sms => "sms",
            PayloadKind::Geo => "geo",
            PayloadKind::Vcard => "vcard",
            PayloadKind::Event => "event",
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WifiSecurity {
    #[default]
    #[serde(rename = "WPA")]
    Wpa,
    #[serde(rename = "WEP")]
    Wep,
    #[serde(rename = "nopass")]
    NoPass,
}

impl WifiSecurity {
    /// Maps a `T:` value onto a security class. Unknown values fall back to WPA.
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_uppercase().as_str() {
            "WEP" => WifiSecurity::Wep,
            "NOPASS" | "NO" | "NONE" | "OPEN" => WifiSecurity::NoPass,
            _ => WifiSecurity::Wpa,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WifiSecurity::Wpa => "WPA",
            WifiSecurity::Wep => "WEP",
            WifiSecurity::NoPass => "nopass",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WifiRecord {
    pub ssid: String,
    pub password: String,
    pub security: WifiSecurity,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TelRecord {
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmailRecord {
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SmsRecord {
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoRecord {
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VCardRecord {
    #[serde(rename = "fn", default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dtstart: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dtend: Option<String>,
}

/// The type-specific sub-record. Serializes as a single `"<type>": {..}` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Payload {
    Wifi(WifiRecord),
    Tel(TelRecord),
    Email(EmailRecord),
    Sms(SmsRecord),
    Geo(GeoRecord),
    Vcard(VCardRecord),
    Event(EventRecord),
}

impl Payload {
    pub fn kind(&self) -> PayloadKind {
        match self {
            Payload::Wifi(_) => PayloadKind::Wifi,
            Payload::Tel(_) => PayloadKind::Tel,
            Payload::Email(_) => PayloadKind::Email,
            Payload::Sms(_) => PayloadKind::Sms,
            Payload::Geo(_) => PayloadKind::Geo,
            Payload::Vcard(_) => PayloadKind::Vcard,
            Payload::Event(_) => PayloadKind::Event,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    #[serde(rename = "type")]
    pub kind: PayloadKind,
    pub normalized: String,
    pub is_url: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<RiskLevel>,
    #[serde(default)]
    pub reasons: Vec<Reason>,
    #[serde(default)]
    pub score: u32,
    #[serde(flatten)]
    pub payload: Option<Payload>,
}

impl ClassificationResult {
    /// A structured record (wifi, tel, ...). Carries no risk level.
    pub fn structured(normalized: String, payload: Payload) -> Self {
        Self {
            kind: payload.kind(),
            normalized,
            is_url: false,
            level: None,
            reasons: Vec::new(),
            score: 0,
            payload: Some(payload),
        }
    }

    pub fn wifi(&self) -> Option<&WifiRecord> {
        match &self.payload {
            Some(Payload::Wifi(w)) => Some(w),
            _ => None,
        }
    }

    pub fn reason_codes(&self) -> Vec<ReasonCode> {
        self.reasons.iter().filter_map(Reason::code).collect()
    }

    pub fn has_reason(&self, code: ReasonCode) -> bool {
        self.reasons.iter().any(|r| r.code() == Some(code))
    }
}

/// Verdict returned by the threat oracle.
///
/// `error` set means the check could not be performed. Such a result says
/// nothing about safety and must not be shown as verified.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteRiskResult {
    pub is_risky: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found_in_files: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usom_details: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RemoteRiskResult {
    pub fn failed(code: impl Into<String>) -> Self {
        Self {
            is_risky: false,
            error: Some(code.into()),
            ..Default::default()
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.error.is_some()
    }
}

/// Local classification plus the oracle verdict, when one was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckedClassification {
    #[serde(flatten)]
    pub classification: ClassificationResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteRiskResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn security_tokens_map_to_classes() {
        assert_eq!(WifiSecurity::from_token("WEP"), WifiSecurity::Wep);
        assert_eq!(WifiSecurity::from_token("nopass"), WifiSecurity::NoPass);
        assert_eq!(WifiSecurity::from_token("open"), WifiSecurity::NoPass);
        assert_eq!(WifiSecurity::from_token("None"), WifiSecurity::NoPass);
        assert_eq!(WifiSecurity::from_token("WPA2"), WifiSecurity::Wpa);
        assert_eq!(WifiSecurity::from_token(""), WifiSecurity::Wpa);
    }

    #[test]
    fn structured_result_serializes_sub_record_under_type() {
        let result = ClassificationResult::structured(
            "tel:+905551112233".to_string(),
            Payload::Tel(TelRecord {
                number: "+905551112233".to_string(),
            }),
        );
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["type"], "tel");
        assert_eq!(value["isUrl"], false);
        assert_eq!(value["tel"]["number"], "+905551112233");
        assert!(value.get("level").is_none());
    }

    #[test]
    fn failed_remote_is_unknown_not_safe() {
        let remote = RemoteRiskResult::failed("timeout");
        assert!(!remote.is_risky);
        assert!(remote.is_unknown());
    }
}
