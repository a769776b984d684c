//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not resolve configuration (see the `proxy-config` crate).

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "proxy-config")]
#[command(about = "Inspect the proxy configuration resolved from the environment", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  proxy-config list\n  proxy-config --output json list\n  proxy-config --production check\n  PORT=8080 proxy-config list\n  proxy-config schema\n"
)]
pub struct Cli {
    /// Output format (table, json)
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Resolve defaults as a production deployment, regardless of RUN_MODE
    #[arg(long, global = true)]
    pub production: bool,

    /// Fail when any value does not match its declared type
    #[arg(long, global = true, env = "PROXY_CONFIG_STRICT")]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the resolved configuration with sensitive values masked
    List,

    /// Describe every configuration field and its default
    Schema,

    /// Report values that do not match their declared type
    Check,
}

/// Output formats supported by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
