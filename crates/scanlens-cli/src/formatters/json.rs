use crate::formatters::Formatter;
use anyhow::Result;
use scanlens_core::{BarcodeValidationResult, CheckedClassification};
use serde::Serialize;

pub struct JsonFormatter;

#[derive(Serialize)]
struct ValidationReport<'a> {
    symbology: &'a str,
    #[serde(flatten)]
    result: &'a BarcodeValidationResult,
}

impl Formatter for JsonFormatter {
    fn classification(&self, checked: &CheckedClassification) -> Result<String> {
        Ok(serde_json::to_string_pretty(checked)?)
    }

    fn validation(&self, symbology: &str, result: &BarcodeValidationResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(&ValidationReport { symbology, result })?)
    }
}
