use crate::cli::FormatArg;
use crate::config_loader::load_effective_config;
use crate::formatters::formatter_for;
use anyhow::Result;
use scanlens_config::OutputFormat;
use scanlens_core::check_barcode;
use std::path::PathBuf;

/// Returns true when the content is rejected.
pub fn validate(
    symbology: &str,
    content: &str,
    format: Option<FormatArg>,
    config_path: Option<&PathBuf>,
) -> Result<bool> {
    let config = load_effective_config(config_path)?;
    let result = check_barcode(symbology, content);

    let format = format.map(OutputFormat::from).unwrap_or_else(|| config.output.format());
    println!("{}", formatter_for(format).validation(symbology, &result)?);

    Ok(!result.ok)
}
