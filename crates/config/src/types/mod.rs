//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define field identifiers and their static declarations (`Field`, `FieldSpec`).
//! - Define the dynamically typed resolved value (`ConfigValue`).
//! - Define the closed value sets of enumerated fields and the runtime mode.
//!
//! Does NOT handle:
//! - The concrete schema (see `schema` module).
//! - Reading the environment (see `loader` module).
//!
//! Invariants:
//! - Types here carry no process state; they are plain data.

mod field;
mod modes;
mod value;

pub use field::{DecodeRule, DefaultValue, Field, FieldKind, FieldSpec};
pub use modes::{LogLevel, PromptLoggingBackend, QueueMode, QuotaDisplayMode, RuntimeMode};
pub use value::ConfigValue;
