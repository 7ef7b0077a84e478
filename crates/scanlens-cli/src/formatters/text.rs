use crate::formatters::Formatter;
use anyhow::Result;
use colored::Colorize;
use scanlens_core::{
    BarcodeReason, BarcodeValidationResult, CheckedClassification, Payload, Reason, ReasonCode,
    RemoteRiskResult, RiskLevel, SourceReason,
};
use std::fmt::Write;

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn classification(&self, checked: &CheckedClassification) -> Result<String> {
        let result = &checked.classification;
        let mut out = String::new();

        field(&mut out, "Type", result.kind.as_str());
        field(&mut out, "Content", &result.normalized);
        if let Some(payload) = &result.payload {
            payload_fields(&mut out, payload);
        }

        if let Some(level) = result.level {
            field(
                &mut out,
                "Risk",
                &format!("{} (score {})", colored_level(level), result.score),
            );
        }
        if !result.reasons.is_empty() {
            out.push_str("Reasons:\n");
            for reason in &result.reasons {
                writeln!(out, "  - {}", describe_reason(reason))?;
            }
        }
        if let Some(remote) = &checked.remote {
            field(&mut out, "Remote", &describe_remote(remote));
        }

        Ok(out.trim_end().to_string())
    }

    fn validation(&self, symbology: &str, result: &BarcodeValidationResult) -> Result<String> {
        let line = match (&result.value, result.reason) {
            (Some(value), _) => format!("{} {} {}", "✔".green(), symbology, value),
            (None, Some(reason)) => format!(
                "{} {}: {}",
                "✘".red(),
                symbology,
                describe_barcode_reason(reason)
            ),
            (None, None) => format!("{} {}: invalid", "✘".red(), symbology),
        };
        Ok(line)
    }
}

fn field(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "{:<10} {}", format!("{label}:"), value);
}

fn optional(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        field(out, label, value);
    }
}

fn payload_fields(out: &mut String, payload: &Payload) {
    match payload {
        Payload::Wifi(wifi) => {
            field(out, "SSID", &wifi.ssid);
            field(out, "Security", wifi.security.as_str());
            if !wifi.password.is_empty() {
                field(out, "Password", &wifi.password);
            }
            if wifi.hidden {
                field(out, "Hidden", "yes");
            }
        }
        Payload::Tel(tel) => field(out, "Number", &tel.number),
        Payload::Email(email) => {
            field(out, "To", &email.to);
            optional(out, "Subject", email.subject.as_deref());
            optional(out, "Body", email.body.as_deref());
        }
        Payload::Sms(sms) => {
            field(out, "Number", &sms.number);
            optional(out, "Body", sms.body.as_deref());
        }
        Payload::Geo(geo) => {
            field(out, "Location", &format!("{}, {}", geo.lat, geo.lon));
            optional(out, "Query", geo.query.as_deref());
        }
        Payload::Vcard(card) => {
            optional(out, "Name", card.full_name.as_deref().or(card.n.as_deref()));
            optional(out, "Phone", card.tel.as_deref());
            optional(out, "Email", card.email.as_deref());
            optional(out, "Org", card.org.as_deref());
            optional(out, "Title", card.title.as_deref());
            optional(out, "Address", card.adr.as_deref());
            optional(out, "URL", card.url.as_deref());
        }
        Payload::Event(event) => {
            optional(out, "Summary", event.summary.as_deref());
            optional(out, "Location", event.location.as_deref());
            optional(out, "Starts", event.dtstart.as_deref());
            optional(out, "Ends", event.dtend.as_deref());
            optional(out, "Details", event.description.as_deref());
        }
    }
}

fn colored_level(level: RiskLevel) -> String {
    match level {
        RiskLevel::Secure => level.to_string().green().bold().to_string(),
        RiskLevel::Suspicious => level.to_string().yellow().bold().to_string(),
        RiskLevel::Unsafe => level.to_string().red().bold().to_string(),
    }
}

pub fn describe_reason(reason: &Reason) -> String {
    match reason {
        Reason::Code(code) => describe_code(*code).to_string(),
        Reason::Note(note) => format!("Oracle: {note}"),
        Reason::Source(SourceReason::Usom { checked_domain, .. }) => match checked_domain {
            Some(domain) => format!("Listed by USOM ({domain})"),
            None => "Listed by USOM".to_string(),
        },
        Reason::Source(SourceReason::Github { files, .. }) => {
            format!("Found in blocklists: {}", files.join(", "))
        }
    }
}

pub fn describe_code(code: ReasonCode) -> &'static str {
    match code {
        ReasonCode::InsecureHttp => "Connection is not encrypted (http)",
        ReasonCode::Homoglyph => "Host contains look-alike or punycode characters",
        ReasonCode::Userinfo => "Credentials are embedded before the host",
        ReasonCode::IpHost => "Host is a raw IP address",
        ReasonCode::SuspiciousKeywords => "Contains words common in phishing lures",
        ReasonCode::SuspiciousTld => "Host has a low-trust TLD or an unusual shape",
        ReasonCode::UrlShortener => "Link shortener hides the destination",
        ReasonCode::NonstandardPort => "Uses a non-standard port",
        ReasonCode::PathEntropy => "Path is long and heavily encoded",
        ReasonCode::ExecutableDownload => "Downloads an installer from an unofficial host",
        ReasonCode::BrandImpersonation => "Mentions a brand outside its official domain",
        ReasonCode::RemoteBlacklist => "Listed by the threat oracle",
    }
}

pub fn describe_remote(remote: &RemoteRiskResult) -> String {
    match (&remote.error, remote.is_risky) {
        (Some(code), _) => format!("could not verify ({code})").yellow().to_string(),
        (None, true) => "listed as dangerous".red().bold().to_string(),
        (None, false) => "no match".green().to_string(),
    }
}

pub fn describe_barcode_reason(reason: BarcodeReason) -> &'static str {
    match reason {
        BarcodeReason::Empty => "content is empty",
        BarcodeReason::NonNumeric => "only digits are allowed",
        BarcodeReason::Length => "wrong number of characters",
        BarcodeReason::Charset => "contains characters this symbology cannot encode",
        BarcodeReason::Range => "value is outside the allowed range",
        BarcodeReason::Checksum => "check digit does not match",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanlens_core::classify;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn url_lists_reasons() {
        plain();
        let checked = CheckedClassification {
            classification: classify("http://example.com/login", None),
            remote: Some(RemoteRiskResult::failed("timeout")),
        };
        let out = TextFormatter.classification(&checked).unwrap();
        assert!(out.contains("Type:      url"));
        assert!(out.contains("SUSPICIOUS (score 3)"));
        assert!(out.contains("Connection is not encrypted (http)"));
        assert!(out.contains("could not verify (timeout)"));
    }

    #[test]
    fn wifi_shows_credentials() {
        plain();
        let checked = CheckedClassification {
            classification: classify("WIFI:T:WPA;S:Cafe;P:latte123;H:true;;", None),
            remote: None,
        };
        let out = TextFormatter.classification(&checked).unwrap();
        assert!(out.contains("SSID:      Cafe"));
        assert!(out.contains("Password:  latte123"));
        assert!(out.contains("Hidden:    yes"));
        assert!(!out.contains("Risk:"));
    }

    #[test]
    fn every_barcode_reason_has_its_own_message() {
        let reasons = [
            BarcodeReason::Empty,
            BarcodeReason::NonNumeric,
            BarcodeReason::Length,
            BarcodeReason::Charset,
            BarcodeReason::Range,
            BarcodeReason::Checksum,
        ];
        let mut messages: Vec<_> = reasons.iter().map(|r| describe_barcode_reason(*r)).collect();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), reasons.len());
    }
}
