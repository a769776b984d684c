//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route each subcommand to its implementation.
//! - Convert a failed `check` into a `CheckFailed` error after printing its report.
//!
//! Does NOT handle:
//! - Loading configuration or initializing logging (see `main`).

use anyhow::Result;
use proxy_config::ConfigSnapshot;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::error::CheckFailed;
use crate::formatters::formatter_for;

/// Run the parsed command against `config`, printing its output to stdout.
pub fn run_command(cli: &Cli, config: &ConfigSnapshot) -> Result<()> {
    let formatter = formatter_for(cli.output);

    match cli.command {
        Commands::List => {
            println!("{}", commands::list::run(config, formatter.as_ref())?);
        }
        Commands::Schema => {
            println!(
                "{}",
                commands::schema::run(config.runtime_mode(), formatter.as_ref())?
            );
        }
        Commands::Check => {
            let (output, count) = commands::check::run(config, formatter.as_ref())?;
            println!("{}", output);
            if count > 0 {
                return Err(CheckFailed { count }.into());
            }
        }
    }

    Ok(())
}
