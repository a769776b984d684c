//! Shared test utilities for proxy-config integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Clear every configuration variable inherited from the host.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.

use assert_cmd::Command;

/// Every variable the proxy configuration reads, plus mode and logging switches.
pub const CONFIG_VARS: &[&str] = &[
    "PORT",
    "OPENAI_KEY",
    "PROXY_KEY",
    "MODEL_RATE_LIMIT",
    "MAX_OUTPUT_TOKENS",
    "REJECT_DISALLOWED",
    "REJECT_SAMPLE_RATE",
    "REJECT_MESSAGE",
    "LOG_LEVEL",
    "CHECK_KEYS",
    "QUOTA_DISPLAY_MODE",
    "PROMPT_LOGGING",
    "PROMPT_LOGGING_BACKEND",
    "GOOGLE_SHEETS_KEY",
    "GOOGLE_SHEETS_SPREADSHEET_ID",
    "QUEUE_MODE",
    "RUN_MODE",
    "PROXY_CONFIG_STRICT",
    "RUST_LOG",
];

/// Returns a hermetic `proxy-config` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Configuration variables are cleared to ensure no leakage from the host.
pub fn proxy_config_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("proxy-config");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }

    cmd
}
