use crate::cli::{ConfigFormat, ConfigLayer};
use crate::config_loader::load_config_layers;
use anyhow::Result;
use scanlens_config::Config;
use std::path::PathBuf;

pub fn check(config_path: Option<&PathBuf>) -> Result<bool> {
    println!("🔍 Validating configuration...");

    let layers = load_config_layers(config_path)?;
    let config = &layers.effective;
    println!("✅ Configuration loaded successfully.");
    match (config_path, &layers.file) {
        (Some(path), _) => println!("   - Config Path: {:?}", path),
        (None, Some(_)) => println!("   - Config Path: ./scanlens.toml"),
        (None, None) => println!("   - Config Path: (none, using defaults)"),
    }

    match config.oracle_base_url() {
        Some(url) => println!("   - Threat Oracle: {}", url),
        None if !config.oracle.enabled => println!("   - Threat Oracle: disabled"),
        None => println!("   - Threat Oracle: not configured (online checks report missing_base_url)"),
    }
    println!("   - History Capacity: {}", config.history.capacity());
    println!("   - Output Format: {:?}", config.output.format());

    Ok(false)
}

pub fn dump(
    explicit_path: Option<&PathBuf>,
    layer: Option<ConfigLayer>,
    format: Option<ConfigFormat>,
) -> Result<()> {
    let layers = load_config_layers(explicit_path)?;

    let selected: Option<&Config> = match layer.unwrap_or(ConfigLayer::Effective) {
        ConfigLayer::File => layers.file.as_ref(),
        ConfigLayer::Effective => Some(&layers.effective),
    };

    let Some(config) = selected else {
        println!("(no config for this layer)");
        return Ok(());
    };

    match format.unwrap_or(ConfigFormat::Json) {
        ConfigFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        ConfigFormat::Toml => println!("{}", toml::to_string_pretty(config)?),
    }

    Ok(())
}
