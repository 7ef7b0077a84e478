//! Payload builder: the inverse of the parser grammars, used for generation.

use crate::model::{EmailRecord, SmsRecord, TelRecord, VCardRecord, WifiRecord};
use serde::{Deserialize, Serialize};

/// Content to encode into a code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GenerationPayload {
    Url { value: String },
    Text { value: String },
    Wifi(WifiRecord),
    Tel(TelRecord),
    Email(EmailRecord),
    Sms(SmsRecord),
    Vcard(VCardRecord),
}

impl GenerationPayload {
    pub fn build(&self) -> String {
        match self {
            GenerationPayload::Url { value } | GenerationPayload::Text { value } => {
                value.trim().to_string()
            }
            GenerationPayload::Wifi(wifi) => build_wifi(wifi),
            GenerationPayload::Tel(tel) => build_tel(&tel.number),
            GenerationPayload::Email(email) => build_email(email),
            GenerationPayload::Sms(sms) => build_sms(sms),
            GenerationPayload::Vcard(card) => build_vcard(card),
        }
    }
}

/// Escapes the characters the WiFi grammar treats as syntax: `\ ; , :`.
pub fn escape_wifi(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | ';' | ',' | ':') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// `WIFI:T:<sec>;S:<ssid>;P:<password>;H:true;` with `P` and `H` only when set.
pub fn build_wifi(wifi: &WifiRecord) -> String {
    let mut out = format!(
        "WIFI:T:{};S:{};",
        wifi.security.as_str(),
        escape_wifi(&wifi.ssid)
    );
    if !wifi.password.is_empty() {
        out.push_str(&format!("P:{};", escape_wifi(&wifi.password)));
    }
    if wifi.hidden {
        out.push_str("H:true;");
    }
    out
}

pub fn build_tel(number: &str) -> String {
    format!("tel:{}", number.trim())
}

pub fn build_email(email: &EmailRecord) -> String {
    let mut params = Vec::new();
    if let Some(subject) = email.subject.as_deref().filter(|s| !s.is_empty()) {
        params.push(format!("subject={}", urlencoding::encode(subject)));
    }
    if let Some(body) = email.body.as_deref().filter(|s| !s.is_empty()) {
        params.push(format!("body={}", urlencoding::encode(body)));
    }

    let mut out = format!("mailto:{}", email.to.trim());
    if !params.is_empty() {
        out.push('?');
        out.push_str(&params.join("&"));
    }
    out
}

pub fn build_sms(sms: &SmsRecord) -> String {
    match sms.body.as_deref().filter(|b| !b.is_empty()) {
        Some(body) => format!("SMSTO:{}:{}", sms.number.trim(), body),
        None => format!("SMSTO:{}:", sms.number.trim()),
    }
}

/// Escapes a vCard text value (RFC 6350 section 3.4).
pub fn escape_vcard(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

pub fn build_vcard(card: &VCardRecord) -> String {
    let mut lines = vec!["BEGIN:VCARD".to_string(), "VERSION:3.0".to_string()];
    let mut push = |name: &str, value: &Option<String>, wrap: fn(String) -> String| {
        if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
            lines.push(format!("{name}:{}", wrap(escape_vcard(v))));
        }
    };

    push("N", &card.n, |v| format!("{v};;;;"));
    push("FN", &card.full_name, |v| v);
    push("ORG", &card.org, |v| v);
    push("TITLE", &card.title, |v| v);
    push("TEL", &card.tel, |v| v);
    push("EMAIL", &card.email, |v| v);
    push("ADR", &card.adr, |v| format!(";;{v};;;;"));
    push("URL", &card.url, |v| v);

    lines.push("END:VCARD".to_string());
    lines.join("\n")
}
