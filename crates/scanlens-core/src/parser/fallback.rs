//! Heuristic steps that run after every explicit grammar has declined.

use super::contact::{is_phone_like, tel_result};
use super::hint::FormatHint;
use super::wifi::{parse_wifi_fields, wifi_result};
use crate::model::{ClassificationResult, PayloadKind, Reason};
use crate::rules::scoring::assess_text;
use crate::scoring::{score_url, RiskAssessment};
use regex::Regex;
use std::sync::OnceLock;
use url::{Host, Url};

const MIN_WPA_PASSPHRASE: usize = 8;
const MAX_SSID_LEN: usize = 32;

fn scheme_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("Valid Regex"))
}

fn domain_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^[a-z0-9\-]+(\.[a-z0-9\-]+)*\.[a-z]{2,}(:\d+)?([/?#].*)?$")
            .expect("Valid Regex")
    })
}

fn dotted_quad_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{1,3}(\.\d{1,3}){3}([:/?#]|$)").expect("Valid Regex"))
}

pub fn has_scheme(s: &str) -> bool {
    scheme_re().is_match(s)
}

fn looks_like_url(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    has_scheme(s)
        || lower.starts_with("www.")
        || s.split_whitespace().any(|token| domain_token_re().is_match(token))
}

/// Candidates for WiFi reconstruction: no URL, email or phone shape.
pub fn may_be_bare_wifi(s: &str) -> bool {
    !s.is_empty() && !looks_like_url(s) && !s.contains('@') && !is_phone_like(s)
}

/// Rebuilds WiFi credentials from scanners that drop the `WIFI:` prefix.
///
/// Accepts bare `S:..;P:..;` pairs or exactly two tokens read as
/// `SSID password`. The two-token form can also match ordinary two-word
/// text; that trade-off is accepted.
pub fn parse_bare_wifi(s: &str) -> Option<ClassificationResult> {
    if has_bare_ssid_field(s) {
        if let Some(record) = parse_wifi_fields(s) {
            return Some(wifi_result(record));
        }
    }

    let tokens: Vec<&str> = s.split_whitespace().collect();
    let [ssid, password] = tokens.as_slice() else {
        return None;
    };
    if ssid.len() > MAX_SSID_LEN
        || password.chars().count() < MIN_WPA_PASSPHRASE
        || ssid.contains(':')
        || password.contains(':')
    {
        return None;
    }

    Some(wifi_result(crate::model::WifiRecord {
        ssid: ssid.to_string(),
        password: password.to_string(),
        ..Default::default()
    }))
}

fn has_bare_ssid_field(s: &str) -> bool {
    s.contains(';')
        && s.split(';')
            .any(|token| token.trim_start().to_ascii_uppercase().starts_with("S:"))
}

/// Phone numbers, unless the scanner read a linear barcode and the text has no scheme or dot.
pub fn accepts_phone(s: &str, hint: FormatHint) -> bool {
    let scheme_or_dot = s.contains(':') || s.contains('.');
    if hint.is_linear() && !scheme_or_dot {
        return false;
    }
    is_phone_like(s)
}

pub fn parse_phone(s: &str) -> Option<ClassificationResult> {
    is_phone_like(s).then(|| tel_result(s))
}

/// Final step: a URL when the text parses as one, free text otherwise.
pub fn parse_url_or_text(s: &str) -> ClassificationResult {
    match parse_url(s) {
        Some((url, candidate)) => {
            let assessment = score_url(&url, &candidate.to_lowercase());
            scored(PayloadKind::Url, url.to_string(), true, assessment)
        }
        None => {
            tracing::debug!("no grammar matched; treating as text");
            scored(PayloadKind::Text, s.to_string(), false, assess_text(s))
        }
    }
}

/// Parses `s` as a URL, prefixing `http://` when no scheme is present.
///
/// Whitespace only disqualifies the implicit form; an explicit scheme goes
/// to the URL parser as is.
pub fn parse_url(s: &str) -> Option<(Url, String)> {
    if s.is_empty() {
        return None;
    }

    let explicit = has_scheme(s);
    let candidate = if explicit {
        s.to_string()
    } else if s.chars().any(char::is_whitespace) {
        return None;
    } else {
        format!("http://{s}")
    };

    let url = Url::parse(&candidate).ok()?;
    let plausible = match url.host() {
        None => false,
        Some(Host::Domain(domain)) => explicit || has_plausible_tld(domain),
        Some(Host::Ipv4(_)) => explicit || dotted_quad_re().is_match(s),
        Some(Host::Ipv6(_)) => true,
    };

    plausible.then_some((url, candidate))
}

fn has_plausible_tld(domain: &str) -> bool {
    let Some((_, tld)) = domain.trim_end_matches('.').rsplit_once('.') else {
        return false;
    };
    tld.starts_with("xn--") || (tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
}

fn scored(
    kind: PayloadKind,
    normalized: String,
    is_url: bool,
    assessment: RiskAssessment,
) -> ClassificationResult {
    ClassificationResult {
        kind,
        normalized,
        is_url,
        level: Some(assessment.level),
        reasons: assessment.reasons.into_iter().map(Reason::Code).collect(),
        score: assessment.score,
        payload: None,
    }
}
