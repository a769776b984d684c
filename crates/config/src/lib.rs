//! Environment-driven configuration for the proxy.
//!
//! This crate declares the proxy's configuration schema, resolves it once from
//! the process environment into an immutable [`ConfigSnapshot`], and derives a
//! redacted [`ConfigListing`] that is safe to show to untrusted viewers.
//!
//! ```no_run
//! use proxy_config::ConfigLoader;
//!
//! let config = ConfigLoader::new().load_dotenv()?.build()?;
//! println!("listening on {}", config.port());
//! for (key, value) in config.list_config().iter() {
//!     println!("{key}: {value}");
//! }
//! # Ok::<(), proxy_config::ConfigError>(())
//! ```

pub mod constants;
mod loader;
pub mod redact;
pub mod schema;
pub mod snapshot;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, EnvSource, ProcessEnv, decode, decode_structured,
    detect_runtime_mode, resolve,
};
pub use redact::{ConfigListing, list_config};
pub use snapshot::{ConfigSnapshot, TypeMismatch};
pub use types::{
    ConfigValue, DecodeRule, DefaultValue, Field, FieldKind, FieldSpec, LogLevel,
    PromptLoggingBackend, QueueMode, QuotaDisplayMode, RuntimeMode,
};
