use serde::{Deserialize, Serialize};

pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub oracle: OracleConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OracleConfig {
    /// Threat oracle root, e.g. `https://oracle.example.org`. Absent means the
    /// oracle is unconfigured and every check reports `missing_base_url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            enabled: true,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct HistoryConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,
}

impl HistoryConfig {
    pub fn capacity(&self) -> usize {
        self.capacity.unwrap_or(DEFAULT_HISTORY_CAPACITY)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

impl OutputConfig {
    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

impl Config {
    /// Layers `other` on top of `self`. Values set in `other` win.
    pub fn merge(&mut self, other: Config) {
        if let Some(url) = other.oracle.base_url {
            self.oracle.base_url = Some(url);
        }
        // enabled defaults to true, so only an explicit false is meaningful
        if !other.oracle.enabled {
            self.oracle.enabled = false;
        }

        if let Some(capacity) = other.history.capacity {
            self.history.capacity = Some(capacity);
        }

        if let Some(format) = other.output.format {
            self.output.format = Some(format);
        }
    }

    /// Oracle root to call, or `None` when the oracle is disabled or unconfigured.
    pub fn oracle_base_url(&self) -> Option<&str> {
        if !self.oracle.enabled {
            return None;
        }
        self.oracle
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

fn default_true() -> bool {
    true
}
