use anyhow::Result;
use scanlens_config::OutputFormat;
use scanlens_core::{BarcodeValidationResult, CheckedClassification};

pub mod json;
pub mod text;

pub trait Formatter {
    fn classification(&self, checked: &CheckedClassification) -> Result<String>;
    fn validation(&self, symbology: &str, result: &BarcodeValidationResult) -> Result<String>;
}

pub fn formatter_for(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(text::TextFormatter),
        OutputFormat::Json => Box::new(json::JsonFormatter),
    }
}
