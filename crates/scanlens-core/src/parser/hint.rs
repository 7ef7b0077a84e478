use serde::{Deserialize, Serialize};

/// Symbology reported by the scanner alongside the decoded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatHint {
    #[default]
    Unknown,
    Qr,
    DataMatrix,
    Pdf417,
    Aztec,
    Ean13,
    Ean8,
    UpcA,
    UpcE,
    Code39,
    Code93,
    Code128,
    Itf,
    Codabar,
}

impl FormatHint {
    /// Accepts scanner spellings such as `EAN_13`, `ean-13`, `org.gs1.EAN-13` or `qr`.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return FormatHint::Unknown;
        };
        let last = raw.rsplit('.').next().unwrap_or(raw);
        let key: String = last
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_uppercase();

        match key.as_str() {
            "QR" | "QRCODE" => FormatHint::Qr,
            "DATAMATRIX" => FormatHint::DataMatrix,
            "PDF417" => FormatHint::Pdf417,
            "AZTEC" => FormatHint::Aztec,
            "EAN13" => FormatHint::Ean13,
            "EAN8" => FormatHint::Ean8,
            "UPCA" | "UPC" => FormatHint::UpcA,
            "UPCE" => FormatHint::UpcE,
            "CODE39" => FormatHint::Code39,
            "CODE93" => FormatHint::Code93,
            "CODE128" => FormatHint::Code128,
            "ITF" | "ITF14" | "INTERLEAVED2OF5" => FormatHint::Itf,
            "CODABAR" => FormatHint::Codabar,
            _ => FormatHint::Unknown,
        }
    }

    /// Linear (1D) symbologies. These never carry phone numbers.
    pub fn is_linear(&self) -> bool {
        matches!(
            self,
            FormatHint::Ean13
                | FormatHint::Ean8
                | FormatHint::UpcA
                | FormatHint::UpcE
                | FormatHint::Code39
                | FormatHint::Code93
                | FormatHint::Code128
                | FormatHint::Itf
                | FormatHint::Codabar
        )
    }
}
