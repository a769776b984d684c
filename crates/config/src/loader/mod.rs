//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Resolve each schema field from an environment source (`resolve`, `decode`).
//! - Provide a builder-pattern `ConfigLoader` that produces one immutable snapshot.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Masking values for display (see `redact`).
//! - Consuming the configuration (server, queueing and logging live elsewhere).
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - Resolution happens once per `build()`; later environment changes are not observed.

mod builder;
mod decode;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use decode::{decode, decode_structured, resolve};
pub use env::{EnvSource, ProcessEnv, detect_runtime_mode};
pub use error::ConfigError;
