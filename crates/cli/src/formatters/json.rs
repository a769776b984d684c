//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format listings, schema rows and check reports as pretty-printed JSON.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;
use proxy_config::ConfigListing;

use super::{CheckReport, Formatter, SchemaRow};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_listing(&self, listing: &ConfigListing) -> Result<String> {
        Ok(serde_json::to_string_pretty(listing)?)
    }

    fn format_schema(&self, rows: &[SchemaRow]) -> Result<String> {
        Ok(serde_json::to_string_pretty(rows)?)
    }

    fn format_check(&self, report: &CheckReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
