//! Resolved configuration values.
//!
//! Responsibilities:
//! - Define `ConfigValue`, the dynamically typed result of resolving one field.
//! - Render values to the display strings used by the redacted listing.
//! - Provide lossless typed views (`as_bool`, `as_i64`, ...).
//!
//! Does NOT handle:
//! - Decoding environment strings (see `loader::decode`).
//! - Checking values against a field's declared kind (see `types::field`).
//!
//! Invariants:
//! - `Absent` and the literal string `"undefined"` both render as the empty string.
//! - Floats render in shortest round-trip form (`0.5`, whole floats without a fraction).
//!   Exponent notation is never used: `1e21` renders as `1000000000000000000000`.

use serde::Serialize;

/// `i64::MIN` as `f64`, exactly `-2^63`.
const I64_MIN_F: f64 = -9_223_372_036_854_775_808.0;
/// `i64::MAX + 1` as `f64`, exactly `2^63`; the first float that does not fit.
const I64_MAX_F: f64 = 9_223_372_036_854_775_808.0;

/// The resolved value of a single configuration field.
///
/// The declared kind of a field is advisory: an operator can put any string in
/// the environment, so a boolean field may still resolve to `Str`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// The field is unset and has no default.
    Absent,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// A composite structured value (array or object).
    Json(serde_json::Value),
}

impl ConfigValue {
    /// Build a string value.
    pub fn string(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// Render the value for display.
    ///
    /// Returns an empty string for absent values and for the literal `"undefined"`.
    pub fn display_string(&self) -> String {
        match self {
            Self::Absent => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Str(s) if s == "undefined" => String::new(),
            Self::Str(s) => s.clone(),
            Self::Json(v) => v.to_string(),
        }
    }

    /// Whether the value renders as the empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Str(s) => s.is_empty() || s == "undefined",
            _ => false,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Integer view that also accepts whole floats (`8080.0`, `1e3`).
    ///
    /// Floats outside the `i64` range yield `None`.
    pub fn as_whole(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Float(f) if f.fract() == 0.0 && *f >= I64_MIN_F && *f < I64_MAX_F => {
                Some(*f as i64)
            }
            _ => None,
        }
    }

    /// Numeric view; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the value's runtime type, used in mismatch reports.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Json(_) => "structured value",
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}
