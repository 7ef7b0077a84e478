//! Content validation for barcode generation.
//!
//! Shape checks (charset, digits) run before length, range and checksum checks,
//! so the reported reason is always the most basic one that applies.

pub mod checksum;

use checksum::{ean13_check_digit, ean8_check_digit};
use serde::{Deserialize, Serialize};
use std::fmt;

const PHARMACODE_MIN: u64 = 3;
const PHARMACODE_MAX: u64 = 131_070;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum BarcodeReason {
    #[error("content is empty")]
    Empty,
    #[error("content must contain digits only")]
    NonNumeric,
    #[error("content has the wrong length")]
    Length,
    #[error("content has characters outside the symbology charset")]
    Charset,
    #[error("value is out of range")]
    Range,
    #[error("check digit does not match")]
    Checksum,
}

impl BarcodeReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            BarcodeReason::Empty => "empty",
            BarcodeReason::NonNumeric => "non_numeric",
            BarcodeReason::Length => "length",
            BarcodeReason::Charset => "charset",
            BarcodeReason::Range => "range",
            BarcodeReason::Checksum => "checksum",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbology {
    Ean13,
    Ean8,
    Ean5,
    Ean2,
    Upc,
    UpcE,
    Itf14,
    Itf,
    Msi,
    Msi10,
    Msi11,
    Msi1010,
    Msi1110,
    Pharmacode,
    Codabar,
    Code128A,
    Code128B,
    Code128C,
    Code39,
    Code128,
    /// Anything not listed above; content passes through.
    Other,
}

impl Symbology {
    /// Case-insensitive lookup of a symbology key such as `EAN13` or `pharmacode`.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_uppercase().as_str() {
            "EAN13" => Symbology::Ean13,
            "EAN8" => Symbology::Ean8,
            "EAN5" => Symbology::Ean5,
            "EAN2" => Symbology::Ean2,
            "UPC" => Symbology::Upc,
            "UPCE" => Symbology::UpcE,
            "ITF14" => Symbology::Itf14,
            "ITF" => Symbology::Itf,
            "MSI" => Symbology::Msi,
            "MSI10" => Symbology::Msi10,
            "MSI11" => Symbology::Msi11,
            "MSI1010" => Symbology::Msi1010,
            "MSI1110" => Symbology::Msi1110,
            "PHARMACODE" => Symbology::Pharmacode,
            "CODABAR" => Symbology::Codabar,
            "CODE128A" => Symbology::Code128A,
            "CODE128B" => Symbology::Code128B,
            "CODE128C" => Symbology::Code128C,
            "CODE39" => Symbology::Code39,
            "CODE128" => Symbology::Code128,
            _ => Symbology::Other,
        }
    }
}

/// Serializable validation outcome: `{ok: true, value}` or `{ok: false, reason}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeValidationResult {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<BarcodeReason>,
}

impl From<Result<String, BarcodeReason>> for BarcodeValidationResult {
    fn from(result: Result<String, BarcodeReason>) -> Self {
        match result {
            Ok(value) => Self {
                ok: true,
                value: Some(value),
                reason: None,
            },
            Err(reason) => Self {
                ok: false,
                value: None,
                reason: Some(reason),
            },
        }
    }
}

impl fmt::Display for BarcodeValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.value, &self.reason) {
            (Some(value), _) => write!(f, "ok: {value}"),
            (_, Some(reason)) => write!(f, "invalid: {}", reason.as_str()),
            _ => write!(f, "invalid"),
        }
    }
}

/// Validates `raw` for `symbology_key` and returns the content to encode.
///
/// EAN-13 and EAN-8 data without a check digit get one appended.
pub fn validate_barcode(symbology_key: &str, raw: &str) -> Result<String, BarcodeReason> {
    let content = raw.trim();
    if content.is_empty() {
        return Err(BarcodeReason::Empty);
    }

    match Symbology::from_key(symbology_key) {
        Symbology::Ean13 => with_check_digit(content, 12, ean13_check_digit),
        Symbology::Ean8 => with_check_digit(content, 7, ean8_check_digit),
        Symbology::Ean5 => digits_exact(content, 5),
        Symbology::Ean2 => digits_exact(content, 2),
        Symbology::Upc => digits_exact(content, 12),
        Symbology::UpcE => {
            digits(content)?;
            if matches!(content.len(), 6 | 8) {
                Ok(content.to_string())
            } else {
                Err(BarcodeReason::Length)
            }
        }
        Symbology::Itf14 => digits_exact(content, 14),
        Symbology::Itf | Symbology::Code128C => {
            digits(content)?;
            if content.len() % 2 == 0 {
                Ok(content.to_string())
            } else {
                Err(BarcodeReason::Length)
            }
        }
        Symbology::Msi
        | Symbology::Msi10
        | Symbology::Msi11
        | Symbology::Msi1010
        | Symbology::Msi1110 => {
            digits(content)?;
            Ok(content.to_string())
        }
        Symbology::Pharmacode => {
            digits(content)?;
            match content.parse::<u64>() {
                Ok(n) if (PHARMACODE_MIN..=PHARMACODE_MAX).contains(&n) => Ok(content.to_string()),
                _ => Err(BarcodeReason::Range),
            }
        }
        Symbology::Codabar => validate_codabar(&content.to_ascii_uppercase()),
        Symbology::Code128A => charset(content, |c| (' '..='_').contains(&c)),
        Symbology::Code128B => charset(content, |c| (' '..='~').contains(&c)),
        Symbology::Code39 => charset(&content.to_ascii_uppercase(), |c| {
            c.is_ascii_digit() || c.is_ascii_uppercase() || "-. $/+%".contains(c)
        }),
        Symbology::Code128 | Symbology::Other => Ok(content.to_string()),
    }
}

/// Convenience wrapper returning the serializable form.
pub fn check_barcode(symbology_key: &str, raw: &str) -> BarcodeValidationResult {
    validate_barcode(symbology_key, raw).into()
}

fn digits(content: &str) -> Result<(), BarcodeReason> {
    if content.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(BarcodeReason::NonNumeric)
    }
}

fn digits_exact(content: &str, len: usize) -> Result<String, BarcodeReason> {
    digits(content)?;
    if content.len() == len {
        Ok(content.to_string())
    } else {
        Err(BarcodeReason::Length)
    }
}

/// `data_len` digits get a check digit appended; `data_len + 1` digits are verified.
fn with_check_digit(
    content: &str,
    data_len: usize,
    check_digit: fn(&str) -> u8,
) -> Result<String, BarcodeReason> {
    digits(content)?;
    if content.len() == data_len {
        return Ok(format!("{content}{}", check_digit(content)));
    }
    if content.len() != data_len + 1 {
        return Err(BarcodeReason::Length);
    }

    let (data, supplied) = content.split_at(data_len);
    if supplied == check_digit(data).to_string() {
        Ok(content.to_string())
    } else {
        Err(BarcodeReason::Checksum)
    }
}

fn charset(content: &str, allowed: impl Fn(char) -> bool) -> Result<String, BarcodeReason> {
    if content.chars().all(allowed) {
        Ok(content.to_string())
    } else {
        Err(BarcodeReason::Charset)
    }
}

fn validate_codabar(content: &str) -> Result<String, BarcodeReason> {
    let in_charset = |c: char| c.is_ascii_digit() || "-$:/.+ABCD".contains(c);
    let is_guard = |c: char| matches!(c, 'A' | 'B' | 'C' | 'D');

    let value = charset(content, in_charset)?;
    if value.len() < 2 {
        return Err(BarcodeReason::Length);
    }
    let first = value.chars().next().is_some_and(is_guard);
    let last = value.chars().last().is_some_and(is_guard);
    if first && last {
        Ok(value)
    } else {
        Err(BarcodeReason::Charset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ean13_appends_or_verifies() {
        assert_eq!(
            validate_barcode("EAN13", "123456789012"),
            Ok("1234567890128".to_string())
        );
        assert_eq!(
            validate_barcode("ean13", "1234567890128"),
            Ok("1234567890128".to_string())
        );
        assert_eq!(
            validate_barcode("EAN13", "1234567890129"),
            Err(BarcodeReason::Checksum)
        );
        assert_eq!(validate_barcode("EAN13", "12345"), Err(BarcodeReason::Length));
        assert_eq!(
            validate_barcode("EAN13", "12345678901a"),
            Err(BarcodeReason::NonNumeric)
        );
    }

    #[test]
    fn ean8_appends_or_verifies() {
        assert_eq!(validate_barcode("EAN8", "1234567"), Ok("12345678".to_string()));
        assert_eq!(validate_barcode("EAN8", "12345678"), Ok("12345678".to_string()));
        assert_eq!(validate_barcode("EAN8", "12345670"), Err(BarcodeReason::Checksum));
        assert_eq!(validate_barcode("EAN8", "123456"), Err(BarcodeReason::Length));
    }

    #[test]
    fn fixed_length_numeric_symbologies() {
        assert!(validate_barcode("EAN5", "12345").is_ok());
        assert_eq!(validate_barcode("EAN5", "1234"), Err(BarcodeReason::Length));
        assert!(validate_barcode("EAN2", "12").is_ok());
        assert!(validate_barcode("UPC", "123456789012").is_ok());
        assert_eq!(validate_barcode("UPC", "12345678901"), Err(BarcodeReason::Length));
        assert!(validate_barcode("UPCE", "123456").is_ok());
        assert!(validate_barcode("UPCE", "12345678").is_ok());
        assert_eq!(validate_barcode("UPCE", "1234567"), Err(BarcodeReason::Length));
        assert!(validate_barcode("ITF14", "12345678901234").is_ok());
        assert_eq!(validate_barcode("ITF", "123"), Err(BarcodeReason::Length));
        assert!(validate_barcode("ITF", "1234").is_ok());
    }

    #[test]
    fn shape_checks_come_first() {
        // Wrong length and non-numeric: the shape problem wins.
        assert_eq!(validate_barcode("UPC", "12a"), Err(BarcodeReason::NonNumeric));
        assert_eq!(validate_barcode("CODE128C", "12a"), Err(BarcodeReason::NonNumeric));
        assert_eq!(validate_barcode("pharmacode", "1x"), Err(BarcodeReason::NonNumeric));
    }

    #[test]
    fn msi_family_accepts_any_digit_run() {
        for key in ["MSI", "MSI10", "MSI11", "MSI1010", "MSI1110"] {
            assert!(validate_barcode(key, "1").is_ok());
            assert!(validate_barcode(key, "1234567890123").is_ok());
            assert_eq!(validate_barcode(key, "12-3"), Err(BarcodeReason::NonNumeric));
        }
    }

    #[test]
    fn pharmacode_boundaries() {
        assert_eq!(validate_barcode("pharmacode", "2"), Err(BarcodeReason::Range));
        assert!(validate_barcode("pharmacode", "3").is_ok());
        assert!(validate_barcode("pharmacode", "131070").is_ok());
        assert_eq!(validate_barcode("pharmacode", "131071"), Err(BarcodeReason::Range));
        assert_eq!(
            validate_barcode("pharmacode", "99999999999999999999999"),
            Err(BarcodeReason::Range)
        );
    }

    #[test]
    fn codabar_rules() {
        assert_eq!(validate_barcode("codabar", "A12345B"), Ok("A12345B".to_string()));
        assert_eq!(validate_barcode("codabar", "a1-2$3:4/5.6+7d"), Ok("A1-2$3:4/5.6+7D".to_string()));
        assert_eq!(validate_barcode("codabar", "12345"), Err(BarcodeReason::Charset));
        assert_eq!(validate_barcode("codabar", "A12E"), Err(BarcodeReason::Charset));
        assert_eq!(validate_barcode("codabar", "A"), Err(BarcodeReason::Length));
        assert!(validate_barcode("codabar", "AB").is_ok());
    }

    #[test]
    fn code128_subsets() {
        assert!(validate_barcode("CODE128A", "HELLO WORLD_").is_ok());
        assert_eq!(validate_barcode("CODE128A", "hello"), Err(BarcodeReason::Charset));
        assert!(validate_barcode("CODE128B", "hello ~").is_ok());
        assert_eq!(validate_barcode("CODE128B", "héllo"), Err(BarcodeReason::Charset));
        assert!(validate_barcode("CODE128C", "1234").is_ok());
        assert_eq!(validate_barcode("CODE128C", "123"), Err(BarcodeReason::Length));
    }

    #[test]
    fn code39_charset() {
        assert_eq!(validate_barcode("CODE39", "abc-123"), Ok("ABC-123".to_string()));
        assert_eq!(validate_barcode("CODE39", "A*B"), Err(BarcodeReason::Charset));
    }

    #[test]
    fn generic_and_unknown_pass_through() {
        assert_eq!(validate_barcode("CODE128", " anything \u{e9} "), Ok("anything \u{e9}".to_string()));
        assert_eq!(validate_barcode("QR", "x"), Ok("x".to_string()));
        assert_eq!(validate_barcode("CODE128", "   "), Err(BarcodeReason::Empty));
        assert_eq!(validate_barcode("EAN13", ""), Err(BarcodeReason::Empty));
    }

    #[test]
    fn serializable_result() {
        let ok = check_barcode("EAN13", "123456789012");
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            serde_json::json!({"ok": true, "value": "1234567890128"})
        );
        let err = check_barcode("pharmacode", "2");
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            serde_json::json!({"ok": false, "reason": "range"})
        );
    }
}
