//! proxy-config - inspect the proxy configuration resolved from the environment.
//!
//! Responsibilities:
//! - Load `.env`, resolve the configuration snapshot once, and initialize logging.
//! - Print the redacted listing, the schema, or a type check report.
//!
//! Does NOT handle:
//! - Resolution or masking rules (see the `proxy-config` crate).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; command output goes to stdout.
//! - Sensitive values are never printed; only the redacted listing is shown.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use proxy_config::{ConfigLoader, ConfigSnapshot, LogLevel, RuntimeMode};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    let loader = match ConfigLoader::new().load_dotenv() {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load environment: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let cli = Cli::parse();

    if let Err(e) = run(cli, loader) {
        eprintln!("Error: {:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }
}

fn run(cli: Cli, mut loader: ConfigLoader) -> anyhow::Result<()> {
    if cli.production {
        loader = loader.with_runtime_mode(RuntimeMode::Production);
    }

    let config = loader
        .strict(cli.strict)
        .build()
        .context("Failed to build configuration")?;

    init_logging(config.log_level());
    report_mismatches(&config);

    run_command(&cli, &config)
}

/// Install the stderr subscriber; `RUST_LOG` wins over the configured level.
fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Re-emit mismatches recorded before the subscriber existed.
fn report_mismatches(config: &ConfigSnapshot) {
    for mismatch in config.mismatches() {
        tracing::warn!(
            env_var = mismatch.field.env_var(),
            "{}: {}",
            mismatch.field.env_var(),
            mismatch
        );
    }
    tracing::debug!(mode = %config.runtime_mode(), "configuration ready");
}
