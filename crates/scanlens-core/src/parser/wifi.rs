use super::{split_unescaped, strip_prefix_ci, unescape};
use crate::builder::build_wifi;
use crate::model::{ClassificationResult, Payload, WifiRecord, WifiSecurity};

pub fn has_wifi_prefix(s: &str) -> bool {
    strip_prefix_ci(s, "WIFI:").is_some()
}

/// Parses `WIFI:T:WPA;S:ssid;P:pass;H:true;;`.
pub fn parse_wifi(s: &str) -> Option<ClassificationResult> {
    let body = strip_prefix_ci(s, "WIFI:")?;
    let record = parse_wifi_fields(body)?;
    Some(wifi_result(record))
}

/// Reads `K:V;` pairs. `S` is required; the first occurrence of each key wins.
pub fn parse_wifi_fields(body: &str) -> Option<WifiRecord> {
    let mut ssid = None;
    let mut password = None;
    let mut security = None;
    let mut hidden = None;

    for token in split_unescaped(body, ';') {
        let Some((key, value)) = split_key_value(&token) else {
            continue;
        };
        let value = unescape(value);
        match key.trim().to_ascii_uppercase().as_str() {
            "S" => {
                ssid.get_or_insert(value);
            }
            "P" => {
                password.get_or_insert(value);
            }
            "T" => {
                security.get_or_insert(WifiSecurity::from_token(&value));
            }
            "H" => {
                hidden.get_or_insert(is_truthy(&value));
            }
            _ => {}
        }
    }

    let ssid = ssid.filter(|s| !s.is_empty())?;
    Some(WifiRecord {
        ssid,
        password: password.unwrap_or_default(),
        security: security.unwrap_or_default(),
        hidden: hidden.unwrap_or(false),
    })
}

pub(crate) fn wifi_result(record: WifiRecord) -> ClassificationResult {
    ClassificationResult::structured(build_wifi(&record), Payload::Wifi(record))
}

/// Splits a raw token at its first unescaped `:`.
fn split_key_value(token: &str) -> Option<(&str, &str)> {
    let mut escaped = false;
    for (idx, c) in token.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            ':' => return Some((&token[..idx], &token[idx + 1..])),
            _ => {}
        }
    }
    None
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wifi(s: &str) -> WifiRecord {
        parse_wifi(s).and_then(|r| r.wifi().cloned()).unwrap()
    }

    #[test]
    fn parses_standard_payload() {
        let w = wifi("WIFI:T:WPA;S:HomeNet;P:s3cret;;");
        assert_eq!(w.ssid, "HomeNet");
        assert_eq!(w.password, "s3cret");
        assert_eq!(w.security, WifiSecurity::Wpa);
        assert!(!w.hidden);
    }

    #[test]
    fn honors_escapes() {
        let w = wifi(r"WIFI:S:a\;b\:c\,d\\e;P:x\;y;T:WEP;;");
        assert_eq!(w.ssid, r"a;b:c,d\e");
        assert_eq!(w.password, "x;y");
        assert_eq!(w.security, WifiSecurity::Wep);
    }

    #[test]
    fn first_duplicate_wins() {
        let w = wifi("WIFI:S:first;S:second;P:one;P:two;;");
        assert_eq!(w.ssid, "first");
        assert_eq!(w.password, "one");
    }

    #[test]
    fn security_and_hidden_variants() {
        assert_eq!(wifi("WIFI:T:nopass;S:x;;").security, WifiSecurity::NoPass);
        assert_eq!(wifi("WIFI:T:OPEN;S:x;;").security, WifiSecurity::NoPass);
        assert_eq!(wifi("WIFI:T:SAE;S:x;;").security, WifiSecurity::Wpa);
        assert_eq!(wifi("WIFI:S:x;;").security, WifiSecurity::Wpa);
        assert!(wifi("WIFI:S:x;H:yes;;").hidden);
        assert!(wifi("WIFI:S:x;H:1;;").hidden);
        assert!(!wifi("WIFI:S:x;H:false;;").hidden);
    }

    #[test]
    fn lowercase_prefix_and_keys() {
        let w = wifi("wifi:s:Office;p:pw;;");
        assert_eq!(w.ssid, "Office");
        assert_eq!(w.password, "pw");
    }

    #[test]
    fn missing_ssid_is_rejected() {
        assert!(parse_wifi("WIFI:T:WPA;P:pw;;").is_none());
        assert!(parse_wifi("WIFI:S:;P:pw;;").is_none());
    }

    #[test]
    fn normalized_is_canonical() {
        let result = parse_wifi("WIFI:P:pw;S:Net;T:wpa2;H:true;;").unwrap();
        assert_eq!(result.normalized, "WIFI:T:WPA;S:Net;P:pw;H:true;");
        assert!(!result.is_url);
        assert!(result.level.is_none());
    }
}
