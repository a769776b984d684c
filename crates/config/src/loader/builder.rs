//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that produces one `ConfigSnapshot`.
//! - Load `.env` files before resolution when asked to.
//! - Layer explicit overrides above the environment source.
//! - Apply the opt-in strict policy for values that do not match their kind.
//!
//! Does NOT handle:
//! - Per-field decoding (delegated to decode.rs).
//! - Masking (see `redact`).
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - Without `strict(true)`, `build()` never fails.

use std::collections::BTreeMap;

use super::env::{EnvSource, Layered, ProcessEnv, detect_runtime_mode};
use super::error::ConfigError;
use crate::constants::DOTENV_DISABLED_VAR;
use crate::snapshot::ConfigSnapshot;
use crate::types::{Field, RuntimeMode};

/// Configuration loader that builds a snapshot from the environment.
pub struct ConfigLoader {
    source: Box<dyn EnvSource + Send + Sync>,
    overrides: BTreeMap<String, String>,
    runtime_mode: Option<RuntimeMode>,
    strict: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a loader that reads the process environment.
    pub fn new() -> Self {
        Self {
            source: Box::new(ProcessEnv),
            overrides: BTreeMap::new(),
            runtime_mode: None,
            strict: false,
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing). Variables that
    /// are already set in the process environment are not overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read variables from `source` instead of the process environment.
    pub fn with_env_source(mut self, source: impl EnvSource + Send + Sync + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Set a raw value for `field`, taking precedence over the environment.
    ///
    /// The value goes through the field's decode rule like an environment value.
    pub fn with_override(mut self, field: Field, raw: impl Into<String>) -> Self {
        self.overrides
            .insert(field.env_var().to_string(), raw.into());
        self
    }

    /// Force the runtime mode instead of reading `RUN_MODE`.
    pub fn with_runtime_mode(mut self, mode: RuntimeMode) -> Self {
        self.runtime_mode = Some(mode);
        self
    }

    /// Fail `build()` when a value does not match its declared kind.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Resolve every field once and return the snapshot.
    ///
    /// # Errors
    ///
    /// In strict mode, returns `ConfigError::InvalidValue` for the first field
    /// (in schema order) whose value does not match its declared kind.
    pub fn build(self) -> Result<ConfigSnapshot, ConfigError> {
        let layered = Layered {
            overrides: &self.overrides,
            base: &*self.source,
        };
        let mode = self
            .runtime_mode
            .unwrap_or_else(|| detect_runtime_mode(&layered));
        let snapshot = ConfigSnapshot::from_source(&layered, mode);

        if self.strict
            && let Some(mismatch) = snapshot.mismatches().first()
        {
            return Err(ConfigError::InvalidValue {
                var: mismatch.field.env_var().to_string(),
                message: mismatch.to_string(),
            });
        }

        Ok(snapshot)
    }
}
