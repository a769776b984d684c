//! Centralized constants for the proxy configuration workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Server Defaults
// =============================================================================

/// Default listen port for the proxy.
pub const DEFAULT_PORT: u16 = 7860;

/// Default number of prompts a single user may send per minute.
pub const DEFAULT_MODEL_RATE_LIMIT: u32 = 4;

/// Default cap on tokens the upstream model may generate per request.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 300;

// =============================================================================
// Content Rejection Defaults
// =============================================================================

/// Default probability that a disallowed request is rejected.
pub const DEFAULT_REJECT_SAMPLE_RATE: f64 = 0.2;

/// Default message returned to clients whose request was rejected.
pub const DEFAULT_REJECT_MESSAGE: &str =
    "This content violates the acceptable use policy of this proxy.";

// =============================================================================
// Redaction & Environment
// =============================================================================

/// Replacement shown for every non-empty sensitive value.
///
/// Fixed length so the mask never hints at the length of the real value.
pub const REDACTION_MASK: &str = "********";

/// Environment variable selecting the runtime mode (`production` or anything else).
pub const RUN_MODE_VAR: &str = "RUN_MODE";

/// Environment variable that disables `.env` loading when set to `1` or `true`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Separator between multiple upstream keys in `OPENAI_KEY`.
pub const UPSTREAM_KEY_SEPARATOR: char = ',';
