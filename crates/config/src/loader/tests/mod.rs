//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test snapshot construction from the process environment.
//! - Test builder overrides, runtime mode selection and strict mode.
//! - Test `.env` loading and its `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - Per-value decoding rules (tested in decode.rs).
//! - Listing and masking (tested in redact.rs).
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the schema reads plus the run-mode selector, unset unless
/// listed in `set`.
pub fn schema_vars(set: &[(&'static str, &'static str)]) -> Vec<(&'static str, Option<&'static str>)> {
    crate::schema::SCHEMA
        .iter()
        .map(|spec| spec.env_var)
        .chain(std::iter::once(crate::constants::RUN_MODE_VAR))
        .map(|name| {
            let value = set
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value);
            (name, value)
        })
        .collect()
}
