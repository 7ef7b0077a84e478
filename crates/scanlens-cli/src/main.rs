mod cli;
mod commands;
mod config_loader;
mod formatters;

use clap::Parser;
use cli::{Cli, Commands, ConfigCommand};
use commands::classify::ClassifyArgs;
use std::process::exit;
use tracing_subscriber::EnvFilter;

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = match &cli.command {
        Commands::Classify {
            input,
            hint,
            online,
            format,
            history,
            fail_on,
        } => commands::classify::classify(
            ClassifyArgs {
                input,
                hint: hint.as_deref(),
                online: *online,
                format: *format,
                history: history.as_ref(),
                fail_on: *fail_on,
            },
            cli.config.as_ref(),
        ),
        Commands::Validate {
            symbology,
            content,
            format,
        } => commands::validate::validate(symbology, content, *format, cli.config.as_ref()),
        Commands::Build { symbology, payload } => {
            commands::build::build(payload, symbology.as_deref())
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommand::Check => commands::config::check(cli.config.as_ref()),
            ConfigCommand::Dump { layer, format } => {
                commands::config::dump(cli.config.as_ref(), *layer, *format).map(|_| false)
            }
        },
    };

    match result {
        Ok(failed) => exit(i32::from(failed)),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit(2);
        }
    }
}
