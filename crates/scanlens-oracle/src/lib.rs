pub mod classify;
pub mod client;
pub mod error;

pub use classify::{classify_checked, classify_online, RemoteCheck};
pub use client::{HttpThreatOracle, ThreatOracle, REQUEST_TIMEOUT};
pub use error::OracleError;
