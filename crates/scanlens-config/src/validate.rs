use crate::config::Config;
use anyhow::{bail, Result};
use url::Url;

pub const MIN_HISTORY_CAPACITY: usize = 50;
pub const MAX_HISTORY_CAPACITY: usize = 200;

pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(raw) = &config.oracle.base_url {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            bail!("Invalid config field 'oracle.base_url': must not be empty. Remove the key to run without an oracle");
        }
        let url = match Url::parse(trimmed) {
            Ok(url) => url,
            Err(e) => bail!("Invalid config field 'oracle.base_url': {}: {}", trimmed, e),
        };
        if !matches!(url.scheme(), "http" | "https") {
            bail!(
                "Invalid config field 'oracle.base_url': scheme '{}' is not supported. Use http or https",
                url.scheme()
            );
        }
        if url.host_str().is_none() {
            bail!("Invalid config field 'oracle.base_url': missing host");
        }
    }

    if let Some(capacity) = config.history.capacity {
        if !(MIN_HISTORY_CAPACITY..=MAX_HISTORY_CAPACITY).contains(&capacity) {
            bail!(
                "Invalid config field 'history.capacity': must be between {} and {}",
                MIN_HISTORY_CAPACITY,
                MAX_HISTORY_CAPACITY
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn base_url_must_be_http() {
        let mut config = Config::default();
        config.oracle.base_url = Some("ftp://oracle.example".to_string());
        let err = validate_config(&config).unwrap_err().to_string();
        assert!(err.contains("scheme 'ftp' is not supported"));

        config.oracle.base_url = Some("not a url".to_string());
        assert!(validate_config(&config).is_err());

        config.oracle.base_url = Some("   ".to_string());
        assert!(validate_config(&config).is_err());

        config.oracle.base_url = Some("https://oracle.example/".to_string());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn history_capacity_bounds() {
        let mut config = Config::default();
        for (capacity, ok) in [(49, false), (50, true), (200, true), (201, false)] {
            config.history.capacity = Some(capacity);
            assert_eq!(validate_config(&config).is_ok(), ok, "capacity {capacity}");
        }
        config.history.capacity = Some(0);
        let err = validate_config(&config).unwrap_err().to_string();
        assert!(err.contains("must be between 50 and 200"));
    }
}
