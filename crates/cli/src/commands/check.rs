//! `proxy-config check`: report every value that does not match its declared type.
//!
//! The report is printed even when it contains problems; the caller turns a
//! non-empty report into a validation exit code.

use anyhow::Result;
use proxy_config::ConfigSnapshot;

use crate::formatters::{CheckReport, Formatter, MismatchRow};

pub fn report(config: &ConfigSnapshot) -> CheckReport {
    CheckReport {
        runtime_mode: config.runtime_mode().to_string(),
        mismatches: config
            .mismatches()
            .iter()
            .map(|mismatch| MismatchRow {
                key: mismatch.field.key(),
                env_var: mismatch.field.env_var(),
                message: mismatch.to_string(),
            })
            .collect(),
    }
}

/// Render the report; also returns the number of problems found.
pub fn run(config: &ConfigSnapshot, formatter: &dyn Formatter) -> Result<(String, usize)> {
    let report = report(config);
    let count = report.mismatches.len();
    Ok((formatter.format_check(&report)?, count))
}
