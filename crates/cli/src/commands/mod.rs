//! Command implementations.
//!
//! Responsibilities:
//! - Turn a resolved snapshot into the output of each subcommand.
//!
//! Does NOT handle:
//! - Argument parsing (see `args`).
//! - Loading the snapshot (see `main`).

pub mod check;
pub mod list;
pub mod schema;
