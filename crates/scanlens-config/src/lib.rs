pub mod config;
pub mod loader;
pub mod validate;

pub use config::{Config, HistoryConfig, OracleConfig, OutputConfig, OutputFormat};
pub use loader::{apply_env_overrides, load_config, ORACLE_URL_ENV};
pub use validate::validate_config;
