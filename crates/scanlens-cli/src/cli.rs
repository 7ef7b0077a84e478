use clap::{Parser, Subcommand, ValueEnum};
use scanlens_config::OutputFormat;
use scanlens_core::{RiskLevel, WifiSecurity};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scanlens")]
#[command(about = "Classify scanned QR and barcode payloads and score links for risk", long_about = None)]
pub struct Cli {
    /// Path to config file (default: ./scanlens.toml)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a scanned payload and score it for risk
    Classify {
        /// Raw payload text, or "-" to read STDIN
        input: String,
        /// Symbology reported by the scanner (e.g. QR_CODE, EAN_13)
        #[arg(long)]
        hint: Option<String>,
        /// Also ask the threat oracle about URLs
        #[arg(long)]
        online: bool,
        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        /// Append the result to this JSON history file
        #[arg(long, value_name = "PATH")]
        history: Option<PathBuf>,
        /// Exit 1 when the risk level is at or above this level
        #[arg(long, value_enum, value_name = "LEVEL")]
        fail_on: Option<LevelArg>,
    },
    /// Validate content for a barcode symbology
    Validate {
        /// Symbology key (EAN13, EAN8, UPC, CODE128, codabar, pharmacode, ...)
        symbology: String,
        /// Content to encode
        content: String,
        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },
    /// Build a payload string for code generation
    Build {
        /// Validate the built payload for this symbology before printing it
        #[arg(long, global = true)]
        symbology: Option<String>,
        #[command(subcommand)]
        payload: BuildCommand,
    },
    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
pub enum BuildCommand {
    /// WiFi network credentials
    Wifi {
        #[arg(long)]
        ssid: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, value_enum, default_value = "wpa")]
        security: SecurityArg,
        #[arg(long)]
        hidden: bool,
    },
    /// Phone number
    Tel { number: String },
    /// E-mail with optional subject and body
    Email {
        to: String,
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        body: Option<String>,
    },
    /// SMS with optional message
    Sms {
        number: String,
        #[arg(long)]
        body: Option<String>,
    },
    /// Contact card (vCard 3.0)
    Vcard {
        /// Formatted name
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        tel: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        org: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        adr: Option<String>,
        #[arg(long)]
        url: Option<String>,
    },
    /// Link, passed through trimmed
    Url { value: String },
    /// Free text, passed through trimmed
    Text { value: String },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Load and validate the configuration
    Check,
    /// Print configuration
    Dump {
        #[arg(long, value_enum)]
        layer: Option<ConfigLayer>,
        #[arg(long, value_enum)]
        format: Option<ConfigFormat>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    Suspicious,
    Unsafe,
}

impl From<LevelArg> for RiskLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Suspicious => RiskLevel::Suspicious,
            LevelArg::Unsafe => RiskLevel::Unsafe,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SecurityArg {
    Wpa,
    Wep,
    Nopass,
}

impl From<SecurityArg> for WifiSecurity {
    fn from(arg: SecurityArg) -> Self {
        match arg {
            SecurityArg::Wpa => WifiSecurity::Wpa,
            SecurityArg::Wep => WifiSecurity::Wep,
            SecurityArg::Nopass => WifiSecurity::NoPass,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigLayer {
    File,
    Effective,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Json,
    Toml,
}
