//! In-memory store of loaded environment values.
//!
//! Responsibilities:
//! - Hold the trimmed key/value pairs produced by [`crate::EnvLoader`].
//! - Answer lookups, falling back to the live process environment.
//!
//! Does NOT handle:
//! - Reading or parsing files (see `loader`).
//! - Synchronization. Writers need `&mut EnvStore`; share the loaded store
//!   read-only (e.g. behind an `Arc`) once start-up is done.
//!
//! Invariants:
//! - Keys are unique; inserting an existing key replaces its value.
//! - Iteration is ordered by key.

use std::collections::BTreeMap;

use crate::loader::process_env_value;

/// Key/value pairs loaded from one or more environment files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvStore {
    vars: BTreeMap<String, String>,
}

impl EnvStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the value for `key`.
    ///
    /// A stored value is returned as-is, even when it is empty. Keys that were
    /// never loaded fall back to the process environment, and to an empty
    /// string when the environment does not define them either.
    pub fn get(&self, key: &str) -> String {
        match self.vars.get(key) {
            Some(value) => value.clone(),
            None => process_env_value(key).unwrap_or_default(),
        }
    }

    /// Return the stored value for `key` without consulting the process environment.
    pub fn get_loaded(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for EnvStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
