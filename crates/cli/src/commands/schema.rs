//! `proxy-config schema`: every declared field with its type and default.

use anyhow::Result;
use proxy_config::{ConfigValue, RuntimeMode, schema::SCHEMA};

use crate::formatters::{Formatter, SchemaRow};

/// Build one row per schema field, defaults resolved for `mode`.
pub fn rows(mode: RuntimeMode) -> Vec<SchemaRow> {
    SCHEMA
        .iter()
        .map(|spec| {
            let default = match spec.default.resolve(mode) {
                ConfigValue::Absent => None,
                value => Some(value.display_string()),
            };
            SchemaRow {
                key: spec.key,
                env_var: spec.env_var,
                kind: spec.kind.describe(),
                default,
                sensitive: spec.sensitive,
                description: spec.description,
            }
        })
        .collect()
}

pub fn run(mode: RuntimeMode, formatter: &dyn Formatter) -> Result<String> {
    formatter.format_schema(&rows(mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_cover_schema_in_order() {
        let rows = rows(RuntimeMode::Development);
        assert_eq!(rows.len(), SCHEMA.len());
        assert_eq!(rows[0].env_var, "PORT");
        assert_eq!(rows[0].default.as_deref(), Some("7860"));
    }

    #[test]
    fn test_check_keys_default_follows_mode() {
        let find = |mode| {
            rows(mode)
                .into_iter()
                .find(|row| row.key == "checkKeys")
                .and_then(|row| row.default)
        };
        assert_eq!(find(RuntimeMode::Development).as_deref(), Some("false"));
        assert_eq!(find(RuntimeMode::Production).as_deref(), Some("true"));
    }

    #[test]
    fn test_absent_defaults_have_no_value() {
        let rows = rows(RuntimeMode::Development);
        let backend = rows
            .iter()
            .find(|row| row.key == "promptLoggingBackend")
            .unwrap();
        assert!(backend.default.is_none());
        assert_eq!(backend.kind, "optional, one of google_sheets");
    }
}
