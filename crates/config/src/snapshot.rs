//! The resolved configuration snapshot.
//!
//! Responsibilities:
//! - Resolve every schema field exactly once, in schema order, into `ConfigSnapshot`.
//! - Record values that do not conform to their declared kind (`TypeMismatch`).
//! - Expose raw values (`get`) and typed accessors for consumers.
//!
//! Does NOT handle:
//! - Building the display-safe listing (see `redact`).
//! - `.env` loading or strict-mode policy (see `loader`).
//!
//! Invariants:
//! - A snapshot is never mutated after construction; all accessors take `&self`.
//! - Typed accessors fall back to the field default when the resolved value does
//!   not conform; `get` always returns what was actually resolved.
//! - `Debug` output masks sensitive fields.
//! - Mismatch reports never include the value of a sensitive field.

use secrecy::SecretString;
use std::borrow::Cow;
use std::fmt;

use crate::constants::{
    DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_MODEL_RATE_LIMIT, DEFAULT_PORT, DEFAULT_REJECT_SAMPLE_RATE,
    REDACTION_MASK, UPSTREAM_KEY_SEPARATOR,
};
use crate::loader::{EnvSource, ProcessEnv, detect_runtime_mode, resolve};
use crate::redact::{ConfigListing, list_config};
use crate::schema::SCHEMA;
use crate::types::{
    ConfigValue, Field, FieldSpec, LogLevel, PromptLoggingBackend, QueueMode, QuotaDisplayMode,
    RuntimeMode,
};

/// A resolved value that does not match its field's declared kind.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeMismatch {
    pub field: Field,
    /// Description of the declared kind.
    pub expected: String,
    /// Runtime type of the resolved value.
    pub found: &'static str,
    /// The resolved value for display, `None` for sensitive fields.
    pub value: Option<String>,
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}, found {}", self.expected, self.found)?;
        if let Some(value) = &self.value {
            write!(f, " {value:?}")?;
        }
        Ok(())
    }
}

/// The complete, immutable set of resolved field values for one process run.
#[derive(Clone)]
pub struct ConfigSnapshot {
    values: Vec<ConfigValue>,
    mode: RuntimeMode,
    mismatches: Vec<TypeMismatch>,
}

impl ConfigSnapshot {
    /// Resolve every field from the process environment.
    ///
    /// The runtime mode is read from `RUN_MODE`. Equivalent to
    /// `ConfigLoader::new().build()` without strict checking.
    pub fn from_env() -> Self {
        let mode = detect_runtime_mode(&ProcessEnv);
        Self::from_source(&ProcessEnv, mode)
    }

    /// Resolve every field from `env` for the given runtime mode.
    ///
    /// Pure for a fixed `env`: no other process state is read.
    pub fn from_source(env: &dyn EnvSource, mode: RuntimeMode) -> Self {
        let mut values = Vec::with_capacity(SCHEMA.len());
        let mut mismatches = Vec::new();

        for spec in &SCHEMA {
            let value = resolve(spec, env, mode);
            tracing::debug!(
                field = spec.key,
                env_var = spec.env_var,
                kind = value.type_name(),
                "resolved configuration field"
            );
            if !spec.kind.accepts(&value) {
                let mismatch = TypeMismatch {
                    field: spec.field,
                    expected: spec.kind.describe(),
                    found: value.type_name(),
                    value: (!spec.sensitive).then(|| value.display_string()),
                };
                tracing::warn!(
                    env_var = spec.env_var,
                    "{}: {}; using default for typed access",
                    spec.env_var,
                    mismatch
                );
                mismatches.push(mismatch);
            }
            values.push(value);
        }

        tracing::info!(
            fields = values.len(),
            mismatches = mismatches.len(),
            mode = %mode,
            "configuration loaded"
        );

        Self {
            values,
            mode,
            mismatches,
        }
    }

    /// The resolved value of `field`, exactly as decoded.
    pub fn get(&self, field: Field) -> &ConfigValue {
        &self.values[field.index()]
    }

    /// Every field with its resolved value, in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static FieldSpec, &ConfigValue)> {
        SCHEMA.iter().zip(self.values.iter())
    }

    /// The runtime mode the snapshot was resolved for.
    pub fn runtime_mode(&self) -> RuntimeMode {
        self.mode
    }

    /// Values that did not match their declared kind.
    pub fn mismatches(&self) -> &[TypeMismatch] {
        &self.mismatches
    }

    /// The display-safe listing of this snapshot.
    pub fn list_config(&self) -> ConfigListing {
        list_config(self)
    }

    /// The resolved value if it conforms to the field's kind, else the default.
    fn conforming(&self, field: Field) -> Cow<'_, ConfigValue> {
        let spec = field.spec();
        let value = self.get(field);
        if spec.kind.accepts(value) {
            Cow::Borrowed(value)
        } else {
            Cow::Owned(spec.default.resolve(self.mode))
        }
    }

    fn secret(&self, field: Field) -> Option<SecretString> {
        let value = self.get(field);
        if value.is_empty() {
            None
        } else {
            Some(SecretString::new(value.display_string().into()))
        }
    }

    fn enumerated<T>(&self, field: Field, parse: fn(&str) -> Option<T>, default: T) -> T {
        self.conforming(field)
            .as_str()
            .and_then(parse)
            .unwrap_or(default)
    }

    pub fn port(&self) -> u16 {
        self.conforming(Field::Port)
            .as_whole()
            .and_then(|port| u16::try_from(port).ok())
            .unwrap_or(DEFAULT_PORT)
    }

    /// The upstream key value as configured, possibly a comma-separated list.
    pub fn openai_key(&self) -> Option<SecretString> {
        self.secret(Field::OpenaiKey)
    }

    /// The individual upstream keys, split on commas, trimmed, blanks dropped.
    pub fn openai_keys(&self) -> Vec<SecretString> {
        let raw = self.get(Field::OpenaiKey).display_string();
        raw.split(UPSTREAM_KEY_SEPARATOR)
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(|key| SecretString::new(key.into()))
            .collect()
    }

    /// The client password, as its display string.
    ///
    /// The value is structured-decoded like other fields, so an all-digit key
    /// beyond the `i64` range becomes a float and reads back rounded
    /// (`12345678901234567890` as `12345678901234567000`). Quote such keys
    /// (`PROXY_KEY='"12345678901234567890"'`) to keep them exact.
    pub fn proxy_key(&self) -> Option<SecretString> {
        self.secret(Field::ProxyKey)
    }

    pub fn model_rate_limit(&self) -> u32 {
        self.conforming(Field::ModelRateLimit)
            .as_whole()
            .and_then(|limit| u32::try_from(limit).ok())
            .unwrap_or(DEFAULT_MODEL_RATE_LIMIT)
    }

    pub fn max_output_tokens(&self) -> u32 {
        self.conforming(Field::MaxOutputTokens)
            .as_whole()
            .and_then(|tokens| u32::try_from(tokens).ok())
            .unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS)
    }

    pub fn reject_disallowed(&self) -> bool {
        self.conforming(Field::RejectDisallowed)
            .as_bool()
            .unwrap_or(false)
    }

    pub fn reject_sample_rate(&self) -> f64 {
        self.conforming(Field::RejectSampleRate)
            .as_f64()
            .unwrap_or(DEFAULT_REJECT_SAMPLE_RATE)
    }

    pub fn reject_message(&self) -> String {
        self.conforming(Field::RejectMessage).display_string()
    }

    pub fn log_level(&self) -> LogLevel {
        self.enumerated(Field::LogLevel, LogLevel::parse, LogLevel::Info)
    }

    pub fn check_keys(&self) -> bool {
        self.conforming(Field::CheckKeys)
            .as_bool()
            .unwrap_or(self.mode.is_production())
    }

    pub fn quota_display_mode(&self) -> QuotaDisplayMode {
        self.enumerated(
            Field::QuotaDisplayMode,
            QuotaDisplayMode::parse,
            QuotaDisplayMode::Full,
        )
    }

    pub fn prompt_logging(&self) -> bool {
        self.conforming(Field::PromptLogging)
            .as_bool()
            .unwrap_or(false)
    }

    pub fn prompt_logging_backend(&self) -> Option<PromptLoggingBackend> {
        self.conforming(Field::PromptLoggingBackend)
            .as_str()
            .and_then(PromptLoggingBackend::parse)
    }

    pub fn google_sheets_key(&self) -> Option<SecretString> {
        self.secret(Field::GoogleSheetsKey)
    }

    pub fn google_sheets_spreadsheet_id(&self) -> Option<SecretString> {
        self.secret(Field::GoogleSheetsSpreadsheetId)
    }

    pub fn queue_mode(&self) -> QueueMode {
        self.enumerated(Field::QueueMode, QueueMode::parse, QueueMode::Fair)
    }
}

impl fmt::Debug for ConfigSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Masked;
        impl fmt::Debug for Masked {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(REDACTION_MASK)
            }
        }

        let mut map = f.debug_map();
        for (spec, value) in self.iter() {
            if spec.sensitive && !value.is_empty() {
                map.entry(&spec.key, &Masked);
            } else {
                map.entry(&spec.key, value);
            }
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn snapshot(vars: &[(&'static str, &'static str)]) -> ConfigSnapshot {
        let env: HashMap<&str, &str> = vars.iter().copied().collect();
        ConfigSnapshot::from_source(&env, RuntimeMode::Development)
    }

    #[test]
    fn test_empty_env_resolves_every_default() {
        let config = snapshot(&[]);
        for (spec, value) in config.iter() {
            assert_eq!(
                *value,
                spec.default.resolve(RuntimeMode::Development),
                "{} should equal its default",
                spec.key
            );
        }
        assert!(config.mismatches().is_empty());
        assert_eq!(config.port(), 7860);
        assert_eq!(config.model_rate_limit(), 4);
        assert_eq!(config.max_output_tokens(), 300);
        assert!(!config.reject_disallowed());
        assert_eq!(config.reject_sample_rate(), 0.2);
        assert_eq!(config.log_level(), LogLevel::Info);
        assert_eq!(config.quota_display_mode(), QuotaDisplayMode::Full);
        assert_eq!(config.queue_mode(), QueueMode::Fair);
        assert!(config.prompt_logging_backend().is_none());
        assert!(config.proxy_key().is_none());
        assert!(config.openai_keys().is_empty());
    }

    #[test]
    fn test_port_override_is_integer() {
        let config = snapshot(&[("PORT", "8080")]);
        assert_eq!(*config.get(Field::Port), ConfigValue::Int(8080));
        assert_eq!(config.port(), 8080);
    }

    #[test]
    fn test_proxy_key_and_sample_rate() {
        let config = snapshot(&[("PROXY_KEY", "sk-abc123"), ("REJECT_SAMPLE_RATE", "0.5")]);
        assert_eq!(*config.get(Field::ProxyKey), ConfigValue::string("sk-abc123"));
        assert_eq!(*config.get(Field::RejectSampleRate), ConfigValue::Float(0.5));
        assert_eq!(config.proxy_key().unwrap().expose_secret(), "sk-abc123");
        assert_eq!(config.reject_sample_rate(), 0.5);
    }

    #[test]
    fn test_check_keys_default_depends_on_mode() {
        let env: HashMap<&str, &str> = HashMap::new();
        let dev = ConfigSnapshot::from_source(&env, RuntimeMode::Development);
        let prod = ConfigSnapshot::from_source(&env, RuntimeMode::Production);
        assert_eq!(*dev.get(Field::CheckKeys), ConfigValue::Bool(false));
        assert_eq!(*prod.get(Field::CheckKeys), ConfigValue::Bool(true));
        assert!(!dev.check_keys());
        assert!(prod.check_keys());
    }

    #[test]
    fn test_malformed_enum_is_kept_and_reported() {
        let config = snapshot(&[("LOG_LEVEL", "banana")]);
        assert_eq!(*config.get(Field::LogLevel), ConfigValue::string("banana"));
        assert_eq!(config.log_level(), LogLevel::Info);

        let mismatches = config.mismatches();
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].field, Field::LogLevel);
        assert_eq!(
            mismatches[0].to_string(),
            "expected one of debug, info, warn, error, found string \"banana\""
        );
    }

    #[test]
    fn test_malformed_boolean_falls_back_for_typed_access() {
        let config = snapshot(&[("PROMPT_LOGGING", "yes"), ("PORT", "eighty")]);
        assert_eq!(*config.get(Field::PromptLogging), ConfigValue::string("yes"));
        assert!(!config.prompt_logging());
        assert_eq!(config.port(), 7860);
        assert_eq!(config.mismatches().len(), 2);
    }

    #[test]
    fn test_out_of_range_port_falls_back() {
        let config = snapshot(&[("PORT", "70000")]);
        assert_eq!(*config.get(Field::Port), ConfigValue::Int(70000));
        assert_eq!(config.port(), 7860);
    }

    #[test]
    fn test_numeric_proxy_key_reads_as_string() {
        let config = snapshot(&[("PROXY_KEY", "1234")]);
        assert_eq!(*config.get(Field::ProxyKey), ConfigValue::Int(1234));
        assert_eq!(config.proxy_key().unwrap().expose_secret(), "1234");
        assert!(config.mismatches().is_empty());
    }

    #[test]
    fn test_whole_float_integers_match_listing() {
        let config = snapshot(&[("PORT", "8080.0"), ("MAX_OUTPUT_TOKENS", "1e3")]);
        assert_eq!(*config.get(Field::Port), ConfigValue::Float(8080.0));
        assert_eq!(*config.get(Field::MaxOutputTokens), ConfigValue::Float(1000.0));
        assert_eq!(config.port(), 8080);
        assert_eq!(config.max_output_tokens(), 1000);
        assert!(config.mismatches().is_empty());

        let listing = config.list_config();
        assert_eq!(listing.get("port"), Some("8080"));
        assert_eq!(listing.get("maxOutputTokens"), Some("1000"));
    }

    #[test]
    fn test_fractional_integer_is_still_a_mismatch() {
        let config = snapshot(&[("MODEL_RATE_LIMIT", "2.5")]);
        assert_eq!(config.model_rate_limit(), 4);
        assert_eq!(config.mismatches().len(), 1);
        assert_eq!(config.mismatches()[0].field, Field::ModelRateLimit);
    }

    #[test]
    fn test_oversized_numeric_proxy_key_reads_back_rounded() {
        let config = snapshot(&[("PROXY_KEY", "12345678901234567890")]);
        assert!(matches!(config.get(Field::ProxyKey), ConfigValue::Float(_)));
        let key = config.proxy_key().unwrap();
        assert_eq!(key.expose_secret(), "12345678901234567000");
        assert_ne!(key.expose_secret(), "12345678901234567890");

        let quoted = snapshot(&[("PROXY_KEY", "\"12345678901234567890\"")]);
        assert_eq!(
            quoted.proxy_key().unwrap().expose_secret(),
            "12345678901234567890"
        );
    }

    #[test]
    fn test_openai_keys_split_on_commas() {
        let config = snapshot(&[("OPENAI_KEY", "sk-one, sk-two,,sk-three")]);
        assert_eq!(
            *config.get(Field::OpenaiKey),
            ConfigValue::string("sk-one, sk-two,,sk-three")
        );
        let keys: Vec<_> = config
            .openai_keys()
            .iter()
            .map(|key| key.expose_secret().to_string())
            .collect();
        assert_eq!(keys, vec!["sk-one", "sk-two", "sk-three"]);
    }

    #[test]
    fn test_prompt_logging_backend() {
        let config = snapshot(&[
            ("PROMPT_LOGGING", "true"),
            ("PROMPT_LOGGING_BACKEND", "google_sheets"),
        ]);
        assert!(config.prompt_logging());
        assert_eq!(
            config.prompt_logging_backend(),
            Some(PromptLoggingBackend::GoogleSheets)
        );
    }

    #[test]
    fn test_mismatch_on_sensitive_field_hides_value() {
        let mismatch = TypeMismatch {
            field: Field::ProxyKey,
            expected: "string".to_string(),
            found: "structured value",
            value: None,
        };
        assert_eq!(mismatch.to_string(), "expected string, found structured value");
    }

    #[test]
    fn test_debug_masks_sensitive_fields() {
        let config = snapshot(&[
            ("PROXY_KEY", "sk-abc123"),
            ("OPENAI_KEY", "sk-upstream"),
            ("GOOGLE_SHEETS_KEY", "sheets-secret"),
        ]);
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-abc123"));
        assert!(!debug.contains("sk-upstream"));
        assert!(!debug.contains("sheets-secret"));
        assert!(debug.contains("\"proxyKey\": ********"));
        assert!(debug.contains("\"port\": Int(7860)"));
    }

    #[test]
    fn test_snapshot_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConfigSnapshot>();
    }
}
