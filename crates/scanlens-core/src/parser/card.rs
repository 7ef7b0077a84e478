use super::{split_unescaped, strip_prefix_ci, unescape};
use crate::model::{ClassificationResult, EventRecord, Payload, VCardRecord};

pub fn is_vcard(s: &str) -> bool {
    s.to_ascii_uppercase().contains("BEGIN:VCARD")
}

pub fn is_calendar(s: &str) -> bool {
    let upper = s.to_ascii_uppercase();
    upper.contains("BEGIN:VEVENT") || upper.contains("BEGIN:VCALENDAR")
}

/// vCard or MECARD contact.
pub fn parse_contact_card(s: &str) -> Option<ClassificationResult> {
    let record = if let Some(body) = strip_prefix_ci(s, "MECARD:") {
        parse_mecard_fields(body)
    } else if is_vcard(s) {
        parse_vcard_fields(s)
    } else {
        return None;
    };

    Some(ClassificationResult::structured(
        s.to_string(),
        Payload::Vcard(record),
    ))
}

pub fn parse_event(s: &str) -> Option<ClassificationResult> {
    if !is_calendar(s) {
        return None;
    }

    let mut event = EventRecord::default();
    for line in unfold_lines(s) {
        let Some((name, value)) = split_property(&line) else {
            continue;
        };
        let slot = match name.as_str() {
            "SUMMARY" => &mut event.summary,
            "LOCATION" => &mut event.location,
            "DESCRIPTION" => &mut event.description,
            "DTSTART" => &mut event.dtstart,
            "DTEND" => &mut event.dtend,
            _ => continue,
        };
        if slot.is_none() {
            *slot = non_empty(unescape_text(value));
        }
    }

    Some(ClassificationResult::structured(
        s.to_string(),
        Payload::Event(event),
    ))
}

fn parse_vcard_fields(s: &str) -> VCardRecord {
    let mut card = VCardRecord::default();
    for line in unfold_lines(s) {
        let Some((name, value)) = split_property(&line) else {
            continue;
        };
        let (slot, parsed) = match name.as_str() {
            "FN" => (&mut card.full_name, unescape_text(value)),
            "N" => (&mut card.n, join_components(value, " ")),
            "TEL" => (&mut card.tel, unescape_text(value)),
            "EMAIL" => (&mut card.email, unescape_text(value)),
            "ORG" => (&mut card.org, join_components(value, " ")),
            "TITLE" => (&mut card.title, unescape_text(value)),
            "ADR" => (&mut card.adr, join_components(value, ", ")),
            "URL" => (&mut card.url, unescape_text(value)),
            _ => continue,
        };
        if slot.is_none() {
            *slot = non_empty(parsed);
        }
    }
    card
}

/// `MECARD:N:Doe,John;TEL:..;EMAIL:..;ORG:..;ADR:..;URL:..;;`
fn parse_mecard_fields(body: &str) -> VCardRecord {
    let mut card = VCardRecord::default();
    for token in split_unescaped(body, ';') {
        let Some((key, value)) = token.split_once(':') else {
            continue;
        };
        match key.trim().to_ascii_uppercase().as_str() {
            "N" if card.n.is_none() => {
                let parts: Vec<String> = split_unescaped(value, ',')
                    .iter()
                    .map(|p| unescape(p).trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect();
                card.n = non_empty(parts.join(" "));
                card.full_name = non_empty(
                    parts.iter().rev().cloned().collect::<Vec<_>>().join(" "),
                );
            }
            "TEL" if card.tel.is_none() => card.tel = non_empty(unescape(value)),
            "EMAIL" if card.email.is_none() => card.email = non_empty(unescape(value)),
            "ORG" if card.org.is_none() => card.org = non_empty(unescape(value)),
            "TITLE" if card.title.is_none() => card.title = non_empty(unescape(value)),
            "ADR" if card.adr.is_none() => card.adr = non_empty(unescape(value)),
            "URL" if card.url.is_none() => card.url = non_empty(unescape(value)),
            _ => {}
        }
    }
    card
}

/// Splits into logical lines, joining folded continuation lines.
fn unfold_lines(s: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for raw in s.split('\n') {
        let raw = raw.trim_end_matches('\r');
        match (raw.strip_prefix([' ', '\t']), lines.last_mut()) {
            (Some(continuation), Some(last)) => last.push_str(continuation),
            _ => lines.push(raw.to_string()),
        }
    }
    lines
}

/// `group.NAME;param=x:value` into (`NAME`, `value`).
fn split_property(line: &str) -> Option<(String, &str)> {
    let (head, value) = line.split_once(':')?;
    let name = head.split(';').next().unwrap_or(head);
    let name = name.rsplit('.').next().unwrap_or(name);
    Some((name.trim().to_ascii_uppercase(), value))
}

/// Resolves vCard text escapes: `\n`, `\,`, `\;`, `\\`.
fn unescape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out.trim().to_string()
}

fn join_components(value: &str, sep: &str) -> String {
    split_unescaped(value, ';')
        .iter()
        .map(|part| unescape_text(part))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> VCardRecord {
        match parse_contact_card(s).and_then(|r| r.payload) {
            Some(Payload::Vcard(c)) => c,
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn vcard_fields() {
        let c = card(
            "BEGIN:VCARD\r\nVERSION:3.0\r\nN:Lovelace;Ada;;;\r\nFN:Ada Lovelace\r\n\
             ORG:Analytical Engines\r\nTITLE:Programmer\r\nTEL;TYPE=CELL:+44 20 7946 0000\r\n\
             TEL:+44 20 0000 0000\r\nitem1.EMAIL;TYPE=INTERNET:ada@example.com\r\n\
             ADR:;;12 St James\\, Square;London;;SW1;UK\r\nURL:https://example.com\r\nEND:VCARD",
        );
        assert_eq!(c.full_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(c.n.as_deref(), Some("Lovelace Ada"));
        assert_eq!(c.org.as_deref(), Some("Analytical Engines"));
        assert_eq!(c.title.as_deref(), Some("Programmer"));
        assert_eq!(c.tel.as_deref(), Some("+44 20 7946 0000"));
        assert_eq!(c.email.as_deref(), Some("ada@example.com"));
        assert_eq!(c.adr.as_deref(), Some("12 St James, Square, London, SW1, UK"));
        assert_eq!(c.url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn folded_lines_are_joined() {
        let c = card("BEGIN:VCARD\nFN:Ada\n  Lovelace\nEND:VCARD");
        assert_eq!(c.full_name.as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn mecard_fields() {
        let c = card("MECARD:N:Doe,John;TEL:+15550100;EMAIL:j@example.com;ADR:1 Main St\\, Springfield;;");
        assert_eq!(c.n.as_deref(), Some("Doe John"));
        assert_eq!(c.full_name.as_deref(), Some("John Doe"));
        assert_eq!(c.tel.as_deref(), Some("+15550100"));
        assert_eq!(c.email.as_deref(), Some("j@example.com"));
        assert_eq!(c.adr.as_deref(), Some("1 Main St, Springfield"));
    }

    #[test]
    fn event_fields() {
        let r = parse_event(
            "BEGIN:VCALENDAR\nBEGIN:VEVENT\nSUMMARY:Launch\\, v2\nLOCATION:Hall A\n\
             DTSTART;TZID=Europe/Istanbul:20261019T090000\nDTEND:20261019T100000\n\
             DESCRIPTION:Bring\\nlaptops\nEND:VEVENT\nEND:VCALENDAR",
        )
        .unwrap();
        assert_eq!(
            r.payload,
            Some(Payload::Event(EventRecord {
                summary: Some("Launch, v2".to_string()),
                location: Some("Hall A".to_string()),
                description: Some("Bring\nlaptops".to_string()),
                dtstart: Some("20261019T090000".to_string()),
                dtend: Some("20261019T100000".to_string()),
            }))
        );
    }
}
