//! Process-environment lookups.
//!
//! Responsibilities:
//! - Read a single variable for fallback lookups in `EnvStore::get`.
//! - Read a single variable for override mode, treating empty values as unset.
//!
//! Invariants:
//! - Names the platform cannot represent (empty, or containing `=` or NUL) are never looked up.
//! - Values that are not valid Unicode are treated as unset.
//! - Override values are returned verbatim, not trimmed.

use crate::constants::KEY_VALUE_DELIMITER;

fn is_lookup_name(key: &str) -> bool {
    !key.is_empty() && !key.contains(['\0', KEY_VALUE_DELIMITER])
}

/// Read a process environment variable, returning None if it is unset.
pub(crate) fn process_env_value(key: &str) -> Option<String> {
    if !is_lookup_name(key) {
        return None;
    }
    std::env::var(key).ok()
}

/// Read a process environment variable for override mode.
///
/// Returns None if the variable is unset or set to the empty string.
pub(crate) fn override_value(key: &str) -> Option<String> {
    process_env_value(key).filter(|value| !value.is_empty())
}
