use crate::config::Config;
use crate::validate::validate_config;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Overrides `oracle.base_url` when set and non-empty.
pub const ORACLE_URL_ENV: &str = "SCANLENS_ORACLE_URL";

/// Reads and validates `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML config file at {:?}", path))?;

    validate_config(&config).with_context(|| format!("Invalid config file at {:?}", path))?;

    Ok(config)
}

/// Applies an oracle URL taken from the environment, then re-validates.
///
/// `oracle_url` is the value of [`ORACLE_URL_ENV`]; callers read the
/// environment so this stays testable.
pub fn apply_env_overrides(config: &mut Config, oracle_url: Option<String>) -> Result<()> {
    let Some(url) = oracle_url.filter(|u| !u.trim().is_empty()) else {
        return Ok(());
    };
    config.oracle.base_url = Some(url.trim().to_string());
    validate_config(config).with_context(|| format!("Invalid value in {}", ORACLE_URL_ENV))
}
