//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide table and JSON renderings of listings, schema rows and check reports.
//! - Define the serializable row types shared by all formats.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//! - Masking; listings arrive already redacted from `proxy_config::list_config`.
//!
//! Invariants:
//! - Tables use tab-separation for consistent alignment in standard terminals.
//! - JSON output is always a valid document, even when empty.
//! - No formatter ever receives an unmasked sensitive value.

use anyhow::Result;
use proxy_config::ConfigListing;
use serde::Serialize;

use crate::args::OutputFormat;

mod json;
mod table;

pub use json::JsonFormatter;
pub use table::TableFormatter;

/// One schema field, as shown by `proxy-config schema`.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaRow {
    pub key: &'static str,
    pub env_var: &'static str,
    pub kind: String,
    /// Default for the active runtime mode; `None` when the field has no default.
    pub default: Option<String>,
    pub sensitive: bool,
    pub description: &'static str,
}

/// One value that does not match its declared type.
#[derive(Debug, Clone, Serialize)]
pub struct MismatchRow {
    pub key: &'static str,
    pub env_var: &'static str,
    pub message: String,
}

/// Result of `proxy-config check`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub runtime_mode: String,
    pub mismatches: Vec<MismatchRow>,
}

/// Renders command output in one format.
pub trait Formatter {
    fn format_listing(&self, listing: &ConfigListing) -> Result<String>;
    fn format_schema(&self, rows: &[SchemaRow]) -> Result<String>;
    fn format_check(&self, report: &CheckReport) -> Result<String>;
}

/// The formatter for `format`.
pub fn formatter_for(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
