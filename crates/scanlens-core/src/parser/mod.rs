//! Payload parser.
//!
//! A sanitized scan is offered to each grammar in [`GRAMMARS`] in order; the
//! first grammar that accepts and parses it wins. Anything left over becomes a
//! URL when it parses as one, or free text otherwise.

pub mod card;
pub mod contact;
pub mod fallback;
pub mod hint;
pub mod wifi;

use crate::model::ClassificationResult;
pub use hint::FormatHint;

/// One entry in the dispatch order.
pub struct Grammar {
    pub name: &'static str,
    /// Cheap shape check; `parse` only runs when this returns true.
    pub accepts: fn(&str, FormatHint) -> bool,
    pub parse: fn(&str) -> Option<ClassificationResult>,
}

pub const GRAMMARS: &[Grammar] = &[
    Grammar {
        name: "wifi",
        accepts: |s, _| wifi::has_wifi_prefix(s),
        parse: wifi::parse_wifi,
    },
    Grammar {
        name: "tel",
        accepts: |s, _| strip_prefix_ci(s, "tel:").is_some(),
        parse: contact::parse_tel,
    },
    Grammar {
        name: "email",
        accepts: |s, _| strip_prefix_ci(s, "mailto:").is_some() || s.contains('@'),
        parse: contact::parse_email,
    },
    Grammar {
        name: "matmsg",
        accepts: |s, _| strip_prefix_ci(s, "MATMSG:").is_some(),
        parse: contact::parse_matmsg,
    },
    Grammar {
        name: "sms",
        accepts: |s, _| {
            strip_prefix_ci(s, "SMSTO:").is_some()
                || strip_prefix_ci(s, "sms:").is_some()
                || s.contains('\n')
        },
        parse: contact::parse_sms,
    },
    Grammar {
        name: "geo",
        accepts: |s, _| strip_prefix_ci(s, "geo:").is_some(),
        parse: contact::parse_geo,
    },
    Grammar {
        name: "vcard",
        accepts: |s, _| card::is_vcard(s) || strip_prefix_ci(s, "MECARD:").is_some(),
        parse: card::parse_contact_card,
    },
    Grammar {
        name: "event",
        accepts: |s, _| card::is_calendar(s),
        parse: card::parse_event,
    },
    Grammar {
        name: "wifi_fallback",
        accepts: |s, _| fallback::may_be_bare_wifi(s),
        parse: fallback::parse_bare_wifi,
    },
    Grammar {
        name: "phone",
        accepts: fallback::accepts_phone,
        parse: fallback::parse_phone,
    },
];

/// Classifies a raw scan. Local heuristics only; never touches the network.
pub fn classify(raw: &str, hint: Option<&str>) -> ClassificationResult {
    let hint = FormatHint::parse(hint);
    let input = sanitize(raw);

    for grammar in GRAMMARS {
        if !(grammar.accepts)(&input, hint) {
            continue;
        }
        if let Some(result) = (grammar.parse)(&input) {
            tracing::debug!(grammar = grammar.name, "payload matched");
            return result;
        }
    }

    fallback::parse_url_or_text(&input)
}

/// Removes BOM, zero-width and bidi marks, and control characters other than
/// line breaks and tabs, then trims.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !is_invisible(*c))
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\r' | '\t'))
        .collect::<String>()
        .trim()
        .to_string()
}

fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{FEFF}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{2069}'
            | '\u{00AD}'
            | '\u{061C}'
    )
}

/// ASCII case-insensitive `strip_prefix`.
pub fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        s.get(prefix.len()..)
    } else {
        None
    }
}

/// Splits `s` on every `sep` that is not backslash-escaped. Escapes are kept.
pub(crate) fn split_unescaped(s: &str, sep: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            current.push(c);
            if let Some(next) = chars.next() {
                current.push(next);
            }
        } else if c == sep {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);
    parts
}

/// Drops backslash escapes: `\x` becomes `x`.
pub(crate) fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Percent-decodes a URI component, keeping the raw text when it is not valid UTF-8.
pub(crate) fn decode_component(s: &str) -> String {
    urlencoding::decode(s)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| s.to_string())
}

/// Looks up a query parameter by case-insensitive name and decodes it.
pub(crate) fn query_param(query: &str, name: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        key.eq_ignore_ascii_case(name)
            .then(|| decode_component(&value.replace('+', " ")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_invisible_and_control() {
        let raw = "\u{FEFF}\u{200B} https://example.com\u{200E}\u{0007} \r\n";
        assert_eq!(sanitize(raw), "https://example.com");
    }

    #[test]
    fn sanitize_keeps_inner_newlines() {
        assert_eq!(sanitize("+905551112233\nhello"), "+905551112233\nhello");
    }

    #[test]
    fn prefix_match_ignores_case_and_char_boundaries() {
        assert_eq!(strip_prefix_ci("WiFi:S:x;", "WIFI:"), Some("S:x;"));
        assert_eq!(strip_prefix_ci("wif", "WIFI:"), None);
        assert_eq!(strip_prefix_ci("çççç", "tel:"), None);
    }

    #[test]
    fn split_respects_escapes() {
        assert_eq!(
            split_unescaped(r"S:a\;b;P:c", ';'),
            vec![r"S:a\;b".to_string(), "P:c".to_string()]
        );
        assert_eq!(unescape(r"a\;b\\c"), r"a;b\c");
    }

    #[test]
    fn query_params_are_decoded() {
        assert_eq!(
            query_param("subject=Hi%20there&body=a+b", "BODY"),
            Some("a b".to_string())
        );
        assert_eq!(query_param("subject=x", "body"), None);
    }

    #[test]
    fn empty_input_is_plain_text() {
        let result = classify("\u{200B}  ", None);
        assert_eq!(result.kind, crate::model::PayloadKind::Text);
        assert_eq!(result.normalized, "");
        assert_eq!(result.score, 0);
    }
}
