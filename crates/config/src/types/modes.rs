//! Enumerated setting values.
//!
//! Responsibilities:
//! - Define the closed value sets of enumerated fields (log level, queue mode, ...).
//! - Convert between those values and their lowercase wire spellings.
//! - Define `RuntimeMode`, which selects environment-dependent defaults.
//!
//! Does NOT handle:
//! - Reading the environment (see `loader::env`).
//!
//! Invariants:
//! - `VARIANTS` lists every wire spelling in declaration order and is the
//!   allowed set used by the schema.
//! - Parsing is exact and case-sensitive, matching the documented spellings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a fieldless enum with fixed lowercase spellings.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $text)] $variant,)+
        }

        impl $name {
            /// Every accepted spelling, in declaration order.
            pub const VARIANTS: &'static [&'static str] = &[$($text),+];

            /// Parse an exact spelling.
            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($text => Some(Self::$variant),)+
                    _ => None,
                }
            }

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// Verbosity of the proxy's own logs.
    pub enum LogLevel {
        Debug => "debug",
        Info => "info",
        Warn => "warn",
        Error => "error",
    }
}

string_enum! {
    /// How much key quota information the status page shows.
    pub enum QuotaDisplayMode {
        None => "none",
        Simple => "simple",
        Full => "full",
    }
}

string_enum! {
    /// Ordering policy for queued upstream requests.
    pub enum QueueMode {
        /// Interleave requests across clients.
        Fair => "fair",
        Random => "random",
        /// Send requests upstream immediately.
        None => "none",
    }
}

string_enum! {
    /// Destination for prompt logs when prompt logging is enabled.
    pub enum PromptLoggingBackend {
        GoogleSheets => "google_sheets",
    }
}

/// Whether the process runs as a production deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeMode {
    #[default]
    Development,
    Production,
}

impl RuntimeMode {
    /// Interpret the value of the run-mode variable.
    ///
    /// Only the exact string `production` selects production; anything else,
    /// including an unset variable, is development.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("production") => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
        }
    }
}
