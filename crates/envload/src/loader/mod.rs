//! Environment file loader.
//!
//! Responsibilities:
//! - Resolve the configured path against the working directory, then the
//!   directory of the running executable.
//! - Parse `KEY=VALUE` lines into an [`crate::EnvStore`].
//! - Apply process-environment overrides when enabled.
//! - Print the diagnostic dump unless output is hidden.
//!
//! Does NOT handle:
//! - Quoting, escaping, interpolation or multi-line values.
//! - Storage and lookup semantics (see `store.rs`).
//!
//! Invariants / Assumptions:
//! - Resolution happens before the store is touched; a missing file leaves it unchanged.
//! - Lines processed before a read error stay in the store.
//! - Diagnostics never include raw line contents of skipped lines.

mod builder;
mod env;
mod error;
mod parse;
mod resolve;

pub use builder::EnvLoader;
pub(crate) use env::process_env_value;
pub use error::LoadError;
pub use parse::{ParsedLine, parse_line};

#[cfg(test)]
mod tests;
