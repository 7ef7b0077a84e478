use crate::cli::{FormatArg, LevelArg};
use crate::config_loader::load_effective_config;
use crate::formatters::formatter_for;
use anyhow::{Context, Result};
use scanlens_config::OutputFormat;
use scanlens_core::history::{push_recent, HistoryEntry};
use scanlens_core::{CheckedClassification, RiskLevel};
use scanlens_oracle::{classify_checked, HttpThreatOracle, RemoteCheck};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

pub struct ClassifyArgs<'a> {
    pub input: &'a str,
    pub hint: Option<&'a str>,
    pub online: bool,
    pub format: Option<FormatArg>,
    pub history: Option<&'a PathBuf>,
    pub fail_on: Option<LevelArg>,
}

/// Returns true when the result reaches the `--fail-on` level.
pub fn classify(args: ClassifyArgs<'_>, config_path: Option<&PathBuf>) -> Result<bool> {
    let config = load_effective_config(config_path)?;
    let raw = read_input(args.input)?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let checked = if args.online {
        let oracle = HttpThreatOracle::new(config.oracle_base_url().map(str::to_string))?;
        runtime.block_on(classify_checked(
            &raw,
            args.hint,
            RemoteCheck::Perform(&oracle),
        ))
    } else {
        runtime.block_on(classify_checked(&raw, args.hint, RemoteCheck::Skip))
    };

    let format = args
        .format
        .map(OutputFormat::from)
        .unwrap_or_else(|| config.output.format());
    println!("{}", formatter_for(format).classification(&checked)?);

    if let Some(path) = args.history {
        record_history(path, &checked, config.history.capacity())?;
    }

    Ok(reaches(&checked, args.fail_on))
}

fn read_input(input: &str) -> Result<String> {
    if input != "-" {
        return Ok(input.to_string());
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read payload from STDIN")?;
    Ok(buf)
}

fn reaches(checked: &CheckedClassification, fail_on: Option<LevelArg>) -> bool {
    match (fail_on, checked.classification.level) {
        (Some(threshold), Some(level)) => level >= RiskLevel::from(threshold),
        _ => false,
    }
}

fn record_history(path: &Path, checked: &CheckedClassification, capacity: usize) -> Result<()> {
    let mut entries: Vec<HistoryEntry> = if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read history file at {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse history file at {:?}", path))?
    } else {
        Vec::new()
    };

    push_recent(
        &mut entries,
        HistoryEntry::from_result(&checked.classification),
        capacity,
    );

    let content = serde_json::to_string_pretty(&entries)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write history file to {:?}", path))?;
    tracing::debug!(entries = entries.len(), "history updated");
    Ok(())
}
