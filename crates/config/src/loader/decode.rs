//! Per-field value resolution.
//!
//! Responsibilities:
//! - Resolve one field: default when unset, otherwise decode the raw string.
//! - Apply the field's declared `DecodeRule`.
//! - Decode structured values (booleans, numbers, JSON) with `serde_json`.
//!
//! Does NOT handle:
//! - Checking the decoded value against the declared kind (see snapshot.rs).
//! - Reading the environment directly (callers pass an `EnvSource`).
//!
//! Invariants:
//! - Resolution never fails: malformed input falls back to the raw string.
//! - `DecodeRule::Opaque` values are returned byte-for-byte.
//! - JSON `null` resolves to `ConfigValue::Absent`.

use serde_json::Value;

use super::env::EnvSource;
use crate::types::{ConfigValue, DecodeRule, FieldSpec, RuntimeMode};

/// Resolve a field against `env`.
///
/// Returns the field default for `mode` when the variable is unset.
pub fn resolve(spec: &FieldSpec, env: &dyn EnvSource, mode: RuntimeMode) -> ConfigValue {
    match env.var(spec.env_var) {
        Some(raw) => decode(spec.decode, raw),
        None => spec.default.resolve(mode),
    }
}

/// Decode a raw environment string according to `rule`.
pub fn decode(rule: DecodeRule, raw: String) -> ConfigValue {
    match rule {
        DecodeRule::Opaque => ConfigValue::Str(raw),
        DecodeRule::Structured => decode_structured(raw),
    }
}

/// Best-effort structured decoding.
///
/// `"true"` becomes `Bool(true)`, `"4"` becomes `Int(4)`, `"0.2"` becomes
/// `Float(0.2)`, a quoted JSON string becomes its contents, arrays and objects
/// become `Json`. Anything that is not valid JSON is kept as `Str(raw)`.
pub fn decode_structured(raw: String) -> ConfigValue {
    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Null) => ConfigValue::Absent,
        Ok(Value::Bool(b)) => ConfigValue::Bool(b),
        Ok(Value::Number(n)) => match n.as_i64() {
            Some(i) => ConfigValue::Int(i),
            None => n
                .as_f64()
                .map(ConfigValue::Float)
                .unwrap_or(ConfigValue::Str(raw)),
        },
        Ok(Value::String(s)) => ConfigValue::Str(s),
        Ok(composite @ (Value::Array(_) | Value::Object(_))) => ConfigValue::Json(composite),
        Err(_) => ConfigValue::Str(raw),
    }
}
