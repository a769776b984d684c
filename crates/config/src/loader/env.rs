//! Environment sources for configuration.
//!
//! Responsibilities:
//! - Abstract "look up a variable by name" behind `EnvSource`.
//! - Read the real process environment (`ProcessEnv`).
//! - Serve fixed in-memory environments (maps), which keeps resolution pure in tests.
//! - Layer explicit overrides above another source (`Layered`).
//! - Detect the runtime mode from `RUN_MODE`.
//!
//! Does NOT handle:
//! - Decoding values (see decode.rs).
//! - `.env` file loading (handled by `ConfigLoader::load_dotenv`).
//!
//! Invariants:
//! - A variable set to the empty string is present (`Some("")`), not unset.
//! - Values are returned verbatim; no trimming is applied.
//! - Non-UTF-8 process values are converted lossily rather than treated as unset.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::constants::RUN_MODE_VAR;
use crate::types::RuntimeMode;

/// A read-only view of environment variables.
pub trait EnvSource {
    /// Return the value of `name`, or `None` if it is unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}

impl<K, V> EnvSource for HashMap<K, V>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
{
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).map(|value| value.as_ref().to_string())
    }
}

impl<K, V> EnvSource for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).map(|value| value.as_ref().to_string())
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

impl<T: EnvSource + ?Sized> EnvSource for Box<T> {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// Read the runtime mode from `RUN_MODE` in `env`.
pub fn detect_runtime_mode(env: &dyn EnvSource) -> RuntimeMode {
    RuntimeMode::from_env_value(env.var(RUN_MODE_VAR).as_deref())
}

/// Overrides consulted before falling back to a base source.
pub(crate) struct Layered<'a> {
    pub overrides: &'a BTreeMap<String, String>,
    pub base: &'a dyn EnvSource,
}

impl EnvSource for Layered<'_> {
    fn var(&self, name: &str) -> Option<String> {
        self.overrides
            .get(name)
            .cloned()
            .or_else(|| self.base.var(name))
    }
}
