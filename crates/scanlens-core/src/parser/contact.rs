use super::{decode_component, query_param, split_unescaped, strip_prefix_ci, unescape};
use crate::builder::{build_email, build_sms, build_tel};
use crate::model::{
    ClassificationResult, EmailRecord, GeoRecord, Payload, SmsRecord, TelRecord,
};
use regex::Regex;
use std::sync::OnceLock;

const MIN_PHONE_DIGITS: usize = 6;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").expect("Valid Regex")
    })
}

/// At least six digits and nothing but `+()- ` around them.
pub fn is_phone_like(s: &str) -> bool {
    let digits = s.chars().filter(|c| c.is_ascii_digit()).count();
    digits >= MIN_PHONE_DIGITS
        && s
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '(' | ')' | '-' | ' '))
}

pub fn is_bare_email(s: &str) -> bool {
    email_re().is_match(s)
}

pub fn parse_tel(s: &str) -> Option<ClassificationResult> {
    let number = strip_prefix_ci(s, "tel:")?.trim();
    if number.is_empty() {
        return None;
    }
    Some(tel_result(number))
}

pub(crate) fn tel_result(number: &str) -> ClassificationResult {
    ClassificationResult::structured(
        build_tel(number),
        Payload::Tel(TelRecord {
            number: number.trim().to_string(),
        }),
    )
}

/// `mailto:to?subject=..&body=..` or a bare address.
pub fn parse_email(s: &str) -> Option<ClassificationResult> {
    let record = if let Some(rest) = strip_prefix_ci(s, "mailto:") {
        let (address, query) = rest.split_once('?').unwrap_or((rest, ""));
        let to = decode_component(address).trim().to_string();
        if to.is_empty() {
            return None;
        }
        EmailRecord {
            to,
            subject: query_param(query, "subject"),
            body: query_param(query, "body"),
        }
    } else if is_bare_email(s) {
        EmailRecord {
            to: s.to_string(),
            ..Default::default()
        }
    } else {
        return None;
    };

    Some(email_result(record))
}

/// `MATMSG:TO:a@b.c;SUB:subject;BODY:text;;`
pub fn parse_matmsg(s: &str) -> Option<ClassificationResult> {
    let body = strip_prefix_ci(s, "MATMSG:")?;
    let mut to = None;
    let mut subject = None;
    let mut text = None;

    for token in split_unescaped(body, ';') {
        let Some((key, value)) = token.split_once(':') else {
            continue;
        };
        let value = unescape(value);
        match key.trim().to_ascii_uppercase().as_str() {
            "TO" => {
                to.get_or_insert(value);
            }
            "SUB" => {
                subject.get_or_insert(value);
            }
            "BODY" => {
                text.get_or_insert(value);
            }
            _ => {}
        }
    }

    let to = to.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())?;
    Some(email_result(EmailRecord {
        to,
        subject: subject.filter(|s| !s.is_empty()),
        body: text.filter(|b| !b.is_empty()),
    }))
}

fn email_result(record: EmailRecord) -> ClassificationResult {
    ClassificationResult::structured(build_email(&record), Payload::Email(record))
}

/// `SMSTO:number:body`, `sms:number?body=..`, or a phone number line followed by a message.
pub fn parse_sms(s: &str) -> Option<ClassificationResult> {
    let record = if let Some(rest) = strip_prefix_ci(s, "SMSTO:") {
        let (number, body) = match rest.split_once(':') {
            Some((number, body)) => (number, Some(body)),
            None => (rest, None),
        };
        SmsRecord {
            number: number.trim().to_string(),
            body: body.filter(|b| !b.is_empty()).map(str::to_string),
        }
    } else if let Some(rest) = strip_prefix_ci(s, "sms:") {
        let (number, query) = rest.split_once('?').unwrap_or((rest, ""));
        SmsRecord {
            number: decode_component(number.trim_end_matches(';')).trim().to_string(),
            body: query_param(query, "body").filter(|b| !b.is_empty()),
        }
    } else {
        let (first, rest) = s.split_once('\n')?;
        let number = first.trim();
        let body = rest.trim();
        if !is_phone_like(number) || body.is_empty() {
            return None;
        }
        SmsRecord {
            number: number.to_string(),
            body: Some(body.to_string()),
        }
    };

    if record.number.is_empty() {
        return None;
    }
    Some(ClassificationResult::structured(
        build_sms(&record),
        Payload::Sms(record),
    ))
}

/// `geo:lat,lon[,alt][;params][?q=query]`
pub fn parse_geo(s: &str) -> Option<ClassificationResult> {
    let rest = strip_prefix_ci(s, "geo:")?;
    let (coords, query) = rest.split_once('?').unwrap_or((rest, ""));
    let coords = coords.split(';').next().unwrap_or_default();
    let mut parts = coords.split(',').map(str::trim);
    let lat_raw = parts.next()?;
    let lon_raw = parts.next()?;

    let lat: f64 = lat_raw.parse().ok()?;
    let lon: f64 = lon_raw.parse().ok()?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return None;
    }

    let query = query_param(query, "q").filter(|q| !q.is_empty());
    let mut normalized = format!("geo:{lat_raw},{lon_raw}");
    if let Some(q) = &query {
        normalized.push_str(&format!("?q={}", urlencoding::encode(q)));
    }

    Some(ClassificationResult::structured(
        normalized,
        Payload::Geo(GeoRecord { lat, lon, query }),
    ))
}
