pub mod barcode;
pub mod builder;
pub mod domain;
pub mod history;
pub mod model;
pub mod parser;
pub mod remote;
pub mod rules;
pub mod scoring;

pub use barcode::{
    check_barcode, validate_barcode, BarcodeReason, BarcodeValidationResult, Symbology,
};
pub use builder::{build_email, build_sms, build_tel, build_vcard, build_wifi, GenerationPayload};
pub use history::{push_recent, HistoryEntry};
pub use model::{
    CheckedClassification, ClassificationResult, Payload, PayloadKind, Reason, ReasonCode,
    RemoteRiskResult, SourceReason, WifiRecord, WifiSecurity,
};
pub use parser::{classify, FormatHint};
pub use remote::merge_remote;
pub use rules::grade::{calculate_level, RiskLevel};
pub use scoring::{score_url, RiskAssessment};
