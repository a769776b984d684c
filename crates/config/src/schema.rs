//! The declared configuration schema.
//!
//! Responsibilities:
//! - Declare every field with its environment variable, kind, default, decode rule
//!   and sensitivity, in the fixed order used for resolution and display.
//!
//! Does NOT handle:
//! - Resolving values (see `loader::decode`).
//! - Masking values (see `redact`).
//!
//! Invariants:
//! - `SCHEMA[i].field == Field::ALL[i]` for every `i`.
//! - Only `OPENAI_KEY` uses `DecodeRule::Opaque`; it may hold a comma-separated
//!   list of keys that must not be parsed.
//! - Sensitivity is declared per entry, so every sensitive field is in the schema.

use crate::constants::{
    DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_MODEL_RATE_LIMIT, DEFAULT_PORT, DEFAULT_REJECT_MESSAGE,
    DEFAULT_REJECT_SAMPLE_RATE,
};
use crate::types::{
    DecodeRule, DefaultValue, Field, FieldKind, FieldSpec, LogLevel, PromptLoggingBackend,
    QueueMode, QuotaDisplayMode,
};

/// Every field, in schema order.
pub static SCHEMA: [FieldSpec; 16] = [
    FieldSpec {
        field: Field::Port,
        key: "port",
        env_var: "PORT",
        kind: FieldKind::Integer,
        default: DefaultValue::Int(DEFAULT_PORT as i64),
        decode: DecodeRule::Structured,
        sensitive: false,
        description: "Port the proxy listens on",
    },
    FieldSpec {
        field: Field::OpenaiKey,
        key: "openaiKey",
        env_var: "OPENAI_KEY",
        kind: FieldKind::String,
        default: DefaultValue::Str(""),
        decode: DecodeRule::Opaque,
        sensitive: true,
        description: "Upstream API key, or a comma-separated list of keys",
    },
    FieldSpec {
        field: Field::ProxyKey,
        key: "proxyKey",
        env_var: "PROXY_KEY",
        kind: FieldKind::String,
        default: DefaultValue::Str(""),
        decode: DecodeRule::Structured,
        sensitive: true,
        description: "Password clients must present to use the proxy",
    },
    FieldSpec {
        field: Field::ModelRateLimit,
        key: "modelRateLimit",
        env_var: "MODEL_RATE_LIMIT",
        kind: FieldKind::Integer,
        default: DefaultValue::Int(DEFAULT_MODEL_RATE_LIMIT as i64),
        decode: DecodeRule::Structured,
        sensitive: false,
        description: "Requests per minute allowed for each client",
    },
    FieldSpec {
        field: Field::MaxOutputTokens,
        key: "maxOutputTokens",
        env_var: "MAX_OUTPUT_TOKENS",
        kind: FieldKind::Integer,
        default: DefaultValue::Int(DEFAULT_MAX_OUTPUT_TOKENS as i64),
        decode: DecodeRule::Structured,
        sensitive: false,
        description: "Upper bound on tokens generated per request",
    },
    FieldSpec {
        field: Field::RejectDisallowed,
        key: "rejectDisallowed",
        env_var: "REJECT_DISALLOWED",
        kind: FieldKind::Boolean,
        default: DefaultValue::Bool(false),
        decode: DecodeRule::Structured,
        sensitive: false,
        description: "Reject requests that contain disallowed content",
    },
    FieldSpec {
        field: Field::RejectSampleRate,
        key: "rejectSampleRate",
        env_var: "REJECT_SAMPLE_RATE",
        kind: FieldKind::Float,
        default: DefaultValue::Float(DEFAULT_REJECT_SAMPLE_RATE),
        decode: DecodeRule::Structured,
        sensitive: false,
        description: "Fraction of disallowed requests that are rejected",
    },
    FieldSpec {
        field: Field::RejectMessage,
        key: "rejectMessage",
        env_var: "REJECT_MESSAGE",
        kind: FieldKind::String,
        default: DefaultValue::Str(DEFAULT_REJECT_MESSAGE),
        decode: DecodeRule::Structured,
        sensitive: false,
        description: "Message returned for rejected requests",
    },
    FieldSpec {
        field: Field::LogLevel,
        key: "logLevel",
        env_var: "LOG_LEVEL",
        kind: FieldKind::Enumerated(LogLevel::VARIANTS),
        default: DefaultValue::Str("info"),
        decode: DecodeRule::Structured,
        sensitive: false,
        description: "Minimum level of emitted logs",
    },
    FieldSpec {
        field: Field::CheckKeys,
        key: "checkKeys",
        env_var: "CHECK_KEYS",
        kind: FieldKind::Boolean,
        default: DefaultValue::ProductionOnly,
        decode: DecodeRule::Structured,
        sensitive: false,
        description: "Verify upstream keys at startup (defaults to on in production)",
    },
    FieldSpec {
        field: Field::QuotaDisplayMode,
        key: "quotaDisplayMode",
        env_var: "QUOTA_DISPLAY_MODE",
        kind: FieldKind::Enumerated(QuotaDisplayMode::VARIANTS),
        default: DefaultValue::Str("full"),
        decode: DecodeRule::Structured,
        sensitive: false,
        description: "Detail of key quota shown on the status page",
    },
    FieldSpec {
        field: Field::PromptLogging,
        key: "promptLogging",
        env_var: "PROMPT_LOGGING",
        kind: FieldKind::Boolean,
        default: DefaultValue::Bool(false),
        decode: DecodeRule::Structured,
        sensitive: false,
        description: "Record prompts and completions",
    },
    FieldSpec {
        field: Field::PromptLoggingBackend,
        key: "promptLoggingBackend",
        env_var: "PROMPT_LOGGING_BACKEND",
        kind: FieldKind::OptionalEnumerated(PromptLoggingBackend::VARIANTS),
        default: DefaultValue::Absent,
        decode: DecodeRule::Structured,
        sensitive: false,
        description: "Where prompt logs are written",
    },
    FieldSpec {
        field: Field::GoogleSheetsKey,
        key: "googleSheetsKey",
        env_var: "GOOGLE_SHEETS_KEY",
        kind: FieldKind::OptionalString,
        default: DefaultValue::Absent,
        decode: DecodeRule::Structured,
        sensitive: true,
        description: "Credentials for the prompt logging backend",
    },
    FieldSpec {
        field: Field::GoogleSheetsSpreadsheetId,
        key: "googleSheetsSpreadsheetId",
        env_var: "GOOGLE_SHEETS_SPREADSHEET_ID",
        kind: FieldKind::OptionalString,
        default: DefaultValue::Absent,
        decode: DecodeRule::Structured,
        sensitive: true,
        description: "Spreadsheet receiving prompt logs",
    },
    FieldSpec {
        field: Field::QueueMode,
        key: "queueMode",
        env_var: "QUEUE_MODE",
        kind: FieldKind::Enumerated(QueueMode::VARIANTS),
        default: DefaultValue::Str("fair"),
        decode: DecodeRule::Structured,
        sensitive: false,
        description: "Ordering of queued upstream requests",
    },
];

/// Fields whose values are masked on display.
pub fn sensitive_fields() -> impl Iterator<Item = Field> {
    SCHEMA
        .iter()
        .filter(|spec| spec.sensitive)
        .map(|spec| spec.field)
}
