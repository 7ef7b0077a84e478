use anyhow::{bail, Result};
use scanlens_config::{apply_env_overrides, load_config, Config, ORACLE_URL_ENV};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "scanlens.toml";

#[derive(Debug, Clone)]
pub struct ConfigLayers {
    /// Contents of the config file, when one was found.
    pub file: Option<Config>,
    /// Defaults, then the file, then the environment.
    pub effective: Config,
}

pub fn load_config_layers(explicit_path: Option<&PathBuf>) -> Result<ConfigLayers> {
    let file = load_file_config(explicit_path)?;

    let mut effective = Config::default();
    if let Some(file_cfg) = &file {
        effective.merge(file_cfg.clone());
    }
    apply_env_overrides(&mut effective, std::env::var(ORACLE_URL_ENV).ok())?;

    Ok(ConfigLayers { file, effective })
}

pub fn load_effective_config(config_path: Option<&PathBuf>) -> Result<Config> {
    Ok(load_config_layers(config_path)?.effective)
}

fn load_file_config(explicit_path: Option<&PathBuf>) -> Result<Option<Config>> {
    let config_file = explicit_path
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    if !config_file.exists() {
        if explicit_path.is_some() {
            bail!("Config file not found: {:?}", config_file);
        }
        return Ok(None);
    }

    load_config(&config_file).map(Some)
}
