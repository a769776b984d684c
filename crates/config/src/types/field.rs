//! Field declarations.
//!
//! Responsibilities:
//! - Identify every configuration field (`Field`).
//! - Describe a field's declared kind, default, decode rule and sensitivity (`FieldSpec`).
//! - Check whether a resolved value conforms to the declared kind.
//!
//! Does NOT handle:
//! - The concrete list of fields and their defaults (see `schema`).
//! - Reading or decoding environment values (see `loader`).
//!
//! Invariants:
//! - `Field::ALL` is in schema order; `Field::index` is the position in that order.
//! - Defaults always conform to their field's kind.

use serde::Serialize;
use std::fmt;

use super::modes::RuntimeMode;
use super::value::ConfigValue;

/// Identifies one configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Port,
    OpenaiKey,
    ProxyKey,
    ModelRateLimit,
    MaxOutputTokens,
    RejectDisallowed,
    RejectSampleRate,
    RejectMessage,
    LogLevel,
    CheckKeys,
    QuotaDisplayMode,
    PromptLogging,
    PromptLoggingBackend,
    GoogleSheetsKey,
    GoogleSheetsSpreadsheetId,
    QueueMode,
}

impl Field {
    /// Every field, in schema order.
    pub const ALL: [Field; 16] = [
        Field::Port,
        Field::OpenaiKey,
        Field::ProxyKey,
        Field::ModelRateLimit,
        Field::MaxOutputTokens,
        Field::RejectDisallowed,
        Field::RejectSampleRate,
        Field::RejectMessage,
        Field::LogLevel,
        Field::CheckKeys,
        Field::QuotaDisplayMode,
        Field::PromptLogging,
        Field::PromptLoggingBackend,
        Field::GoogleSheetsKey,
        Field::GoogleSheetsSpreadsheetId,
        Field::QueueMode,
    ];

    /// Position of this field in schema order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The declaration for this field.
    pub fn spec(self) -> &'static FieldSpec {
        &crate::schema::SCHEMA[self.index()]
    }

    /// The display key, e.g. `proxyKey`.
    pub fn key(self) -> &'static str {
        self.spec().key
    }

    /// The environment variable name, e.g. `PROXY_KEY`.
    pub fn env_var(self) -> &'static str {
        self.spec().env_var
    }

    /// Look a field up by display key or environment variable name.
    pub fn lookup(name: &str) -> Option<Field> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == name || field.env_var() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The semantic type a field is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Float,
    Boolean,
    /// Free text. Decoded scalars are accepted and read back as their display string.
    String,
    /// One of a fixed set of spellings.
    Enumerated(&'static [&'static str]),
    /// Free text that may be absent.
    OptionalString,
    /// One of a fixed set of spellings, or absent.
    OptionalEnumerated(&'static [&'static str]),
}

impl FieldKind {
    /// Whether `value` conforms to this kind.
    pub fn accepts(&self, value: &ConfigValue) -> bool {
        match (self, value) {
            (Self::Integer, ConfigValue::Int(_)) => true,
            (Self::Integer, ConfigValue::Float(_)) => value.as_whole().is_some(),
            (Self::Float, ConfigValue::Float(_) | ConfigValue::Int(_)) => true,
            (Self::Boolean, ConfigValue::Bool(_)) => true,
            (Self::String | Self::OptionalString, _) => true,
            (Self::Enumerated(allowed), ConfigValue::Str(s)) => allowed.contains(&s.as_str()),
            (Self::OptionalEnumerated(_), ConfigValue::Absent) => true,
            (Self::OptionalEnumerated(allowed), ConfigValue::Str(s)) => {
                allowed.contains(&s.as_str())
            }
            _ => false,
        }
    }

    /// Human-readable description, e.g. `one of fair, random, none`.
    pub fn describe(&self) -> String {
        match self {
            Self::Integer => "integer".to_string(),
            Self::Float => "number".to_string(),
            Self::Boolean => "boolean".to_string(),
            Self::String => "string".to_string(),
            Self::Enumerated(allowed) => format!("one of {}", allowed.join(", ")),
            Self::OptionalString => "optional string".to_string(),
            Self::OptionalEnumerated(allowed) => {
                format!("optional, one of {}", allowed.join(", "))
            }
        }
    }
}

/// The value a field takes when its variable is unset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    /// No value; the field is omitted from the listing.
    Absent,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(&'static str),
    /// `true` in production, `false` otherwise.
    ProductionOnly,
}

impl DefaultValue {
    /// Materialize the default for the given runtime mode.
    pub fn resolve(&self, mode: RuntimeMode) -> ConfigValue {
        match *self {
            Self::Absent => ConfigValue::Absent,
            Self::Bool(b) => ConfigValue::Bool(b),
            Self::Int(i) => ConfigValue::Int(i),
            Self::Float(f) => ConfigValue::Float(f),
            Self::Str(s) => ConfigValue::string(s),
            Self::ProductionOnly => ConfigValue::Bool(mode.is_production()),
        }
    }
}

/// How the raw environment string of a field is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeRule {
    /// Try structured decoding (boolean, number, JSON); keep the raw string on failure.
    Structured,
    /// Always keep the raw string.
    Opaque,
}

/// Static declaration of one configuration field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: Field,
    /// Display key used in listings.
    pub key: &'static str,
    pub env_var: &'static str,
    pub kind: FieldKind,
    pub default: DefaultValue,
    pub decode: DecodeRule,
    /// Sensitive values are masked whenever the snapshot is displayed.
    pub sensitive: bool,
    pub description: &'static str,
}
