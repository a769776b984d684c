//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format listings, schema rows and check reports as tab-separated tables.
//!
//! Does NOT handle:
//! - Other output formats.
//!
//! Invariants:
//! - Every row is one line with tab-separated cells; tabs, newlines and
//!   backslashes inside listing values are escaped (`\t`, `\n`, `\\`).

use anyhow::Result;
use proxy_config::ConfigListing;

use super::{CheckReport, Formatter, SchemaRow};

/// Placeholder for a field without a default.
const NO_DEFAULT: &str = "(none)";

/// Escape characters that would split a tab-separated cell or row.
fn escape_cell(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Tab-separated table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_listing(&self, listing: &ConfigListing) -> Result<String> {
        if listing.is_empty() {
            return Ok("No configuration values set.".to_string());
        }

        let mut output = String::from("Key\tValue\n");
        for (key, value) in listing.iter() {
            output.push_str(&format!("{}\t{}\n", key, escape_cell(value)));
        }
        Ok(output)
    }

    fn format_schema(&self, rows: &[SchemaRow]) -> Result<String> {
        let mut output = String::from("Key\tVariable\tType\tDefault\tSensitive\tDescription\n");
        for row in rows {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\n",
                row.key,
                row.env_var,
                row.kind,
                row.default.as_deref().unwrap_or(NO_DEFAULT),
                if row.sensitive { "yes" } else { "no" },
                row.description
            ));
        }
        Ok(output)
    }

    fn format_check(&self, report: &CheckReport) -> Result<String> {
        if report.mismatches.is_empty() {
            return Ok(format!(
                "All configuration values match their declared types ({} mode).",
                report.runtime_mode
            ));
        }

        let mut output = String::from("Variable\tProblem\n");
        for mismatch in &report.mismatches {
            // Messages quote the offending value with `{:?}`, so they are already single-line.
            output.push_str(&format!("{}\t{}\n", mismatch.env_var, mismatch.message));
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proxy_config::{ConfigSnapshot, RuntimeMode};
    use std::collections::HashMap;

    #[test]
    fn test_schema_row_without_default() {
        let rows = [SchemaRow {
            key: "googleSheetsKey",
            env_var: "GOOGLE_SHEETS_KEY",
            kind: "optional string".to_string(),
            default: None,
            sensitive: true,
            description: "Credentials for the prompt logging backend",
        }];
        let output = TableFormatter.format_schema(&rows).unwrap();
        assert!(output.contains("googleSheetsKey\tGOOGLE_SHEETS_KEY\toptional string\t(none)\tyes"));
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("plain text"), "plain text");
        assert_eq!(escape_cell("a\tb\nc\r"), "a\\tb\\nc\\r");
        assert_eq!(escape_cell("C:\\dir"), "C:\\\\dir");
    }

    #[test]
    fn test_listing_values_cannot_break_rows() {
        let env: HashMap<&str, &str> =
            HashMap::from([("REJECT_MESSAGE", "line one\n\tline two")]);
        let config = ConfigSnapshot::from_source(&env, RuntimeMode::Development);
        let output = TableFormatter.format_listing(&config.list_config()).unwrap();

        assert!(output.contains("rejectMessage\tline one\\n\\tline two\n"));
        for line in output.lines() {
            assert_eq!(line.matches('\t').count(), 1, "row split: {line:?}");
        }
    }

    #[test]
    fn test_clean_check_report() {
        let report = CheckReport {
            runtime_mode: "production".to_string(),
            mismatches: Vec::new(),
        };
        let output = TableFormatter.format_check(&report).unwrap();
        assert!(output.contains("production mode"));
    }
}
