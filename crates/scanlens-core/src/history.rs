//! Shape of the recent-scans list kept by callers.
//!
//! Storage is the caller's business; this module only defines the entry and
//! the insertion policy.

use crate::domain::tld;
use crate::model::{ClassificationResult, Payload, PayloadKind, WifiRecord};
use crate::rules::grade::RiskLevel;
use serde::{Deserialize, Serialize};
use url::Url;

pub const MIN_CAPACITY: usize = 50;
pub const MAX_CAPACITY: usize = 200;
pub const DEFAULT_CAPACITY: usize = 100;

/// Calling code prefixes (without `+`) and ISO country codes.
const CALLING_CODES: &[(&str, &str)] = &[
    ("1", "US"),
    ("7", "RU"),
    ("20", "EG"),
    ("27", "ZA"),
    ("30", "GR"),
    ("31", "NL"),
    ("32", "BE"),
    ("33", "FR"),
    ("34", "ES"),
    ("36", "HU"),
    ("39", "IT"),
    ("40", "RO"),
    ("41", "CH"),
    ("43", "AT"),
    ("44", "GB"),
    ("45", "DK"),
    ("46", "SE"),
    ("47", "NO"),
    ("48", "PL"),
    ("49", "DE"),
    ("52", "MX"),
    ("55", "BR"),
    ("61", "AU"),
    ("62", "ID"),
    ("65", "SG"),
    ("81", "JP"),
    ("82", "KR"),
    ("86", "CN"),
    ("90", "TR"),
    ("91", "IN"),
    ("353", "IE"),
    ("358", "FI"),
    ("380", "UA"),
    ("966", "SA"),
    ("971", "AE"),
    ("994", "AZ"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub content: String,
    #[serde(rename = "type")]
    pub kind: PayloadKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<RiskLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wifi: Option<WifiRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl HistoryEntry {
    pub fn from_result(result: &ClassificationResult) -> Self {
        Self {
            content: result.normalized.clone(),
            kind: result.kind,
            level: result.level,
            wifi: result.wifi().cloned(),
            country: derive_country(result),
        }
    }
}

/// Inserts `entry` at the front, drops older entries with the same content
/// and truncates to `capacity`.
pub fn push_recent(entries: &mut Vec<HistoryEntry>, entry: HistoryEntry, capacity: usize) {
    entries.retain(|existing| existing.content != entry.content);
    entries.insert(0, entry);
    entries.truncate(capacity.clamp(MIN_CAPACITY, MAX_CAPACITY));
}

/// Country hint from a URL's ccTLD or a phone number's calling code.
pub fn derive_country(result: &ClassificationResult) -> Option<String> {
    if result.is_url {
        let url = Url::parse(&result.normalized).ok()?;
        return country_from_host(url.host_str()?);
    }

    let number = match &result.payload {
        Some(Payload::Tel(tel)) => tel.number.as_str(),
        Some(Payload::Sms(sms)) => sms.number.as_str(),
        _ => return None,
    };
    country_from_phone(number)
}

pub fn country_from_host(host: &str) -> Option<String> {
    let tld = tld(host)?;
    if tld.len() != 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let code = tld.to_ascii_uppercase();
    Some(if code == "UK" { "GB".to_string() } else { code })
}

pub fn country_from_phone(number: &str) -> Option<String> {
    let digits: String = number
        .trim()
        .strip_prefix('+')?
        .chars()
        .filter(char::is_ascii_digit)
        .collect();

    CALLING_CODES
        .iter()
        .filter(|(prefix, _)| digits.starts_with(prefix))
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|(_, country)| country.to_string())
}
