//! Environment loader builder implementation.
//!
//! Responsibilities:
//! - Provide the builder-pattern `EnvLoader` configuration value.
//! - Load a resolved file into an `EnvStore`, line by line.
//! - Apply process-environment overrides and print the diagnostic dump.
//!
//! Does NOT handle:
//! - Path lookup rules (delegated to resolve.rs).
//! - Line classification (delegated to parse.rs).
//!
//! Invariants / Assumptions:
//! - Later lines replace earlier ones for the same key.
//! - With override mode on, a non-empty process variable wins over the file value.
//! - Malformed lines are skipped with a warning that names only the path and line number.
//! - The dump is printed only after a fully successful load.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::env::override_value;
use super::error::LoadError;
use super::parse::{ParsedLine, parse_line};
use super::resolve::{executable_dir, resolve_env_path};
use crate::constants::DEFAULT_ENV_PATH;
use crate::store::EnvStore;
use crate::summary::write_summary;

/// Configuration for loading an environment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvLoader {
    path: PathBuf,
    override_from_env: bool,
    hide_output: bool,
    base_dir: Option<PathBuf>,
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvLoader {
    /// Create a loader for `.env` with overrides off and output shown.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_ENV_PATH),
            override_from_env: false,
            hide_output: false,
            base_dir: None,
        }
    }

    /// Set the file to load. An empty path means `.env`.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.path = if path.as_os_str().is_empty() {
            PathBuf::from(DEFAULT_ENV_PATH)
        } else {
            path
        };
        self
    }

    /// Let non-empty process environment variables override file values.
    pub fn with_override_from_env(mut self, enabled: bool) -> Self {
        self.override_from_env = enabled;
        self
    }

    /// Suppress the diagnostic dump printed after a successful load.
    pub fn with_hide_output(mut self, hide: bool) -> Self {
        self.hide_output = hide;
        self
    }

    /// Override the directory used for executable-relative resolution (primarily for testing).
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn override_from_env(&self) -> bool {
        self.override_from_env
    }

    pub fn hide_output(&self) -> bool {
        self.hide_output
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// Find the file this loader would read.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::FileNotFound` if the path exists neither relative to
    /// the working directory nor relative to the executable directory.
    pub fn resolve_path(&self) -> Result<PathBuf, LoadError> {
        let base_dir = match &self.base_dir {
            Some(dir) => Some(dir.clone()),
            None => executable_dir(),
        };
        resolve_env_path(&self.path, base_dir.as_deref())
    }

    /// Load the file into a new store.
    pub fn load(&self) -> Result<EnvStore, LoadError> {
        let mut store = EnvStore::new();
        self.load_into(&mut store)?;
        Ok(store)
    }

    /// Load the file into an existing store, merging with what it already holds.
    ///
    /// # Errors
    ///
    /// - `LoadError::FileNotFound` if resolution fails; `store` is left unchanged.
    /// - `LoadError::OpenFailed` if the resolved file cannot be opened.
    /// - `LoadError::ScanFailed` if reading fails; lines read before the
    ///   failure remain in `store`.
    pub fn load_into(&self, store: &mut EnvStore) -> Result<(), LoadError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.load_into_with_output(store, &mut out)
    }

    /// Same as [`EnvLoader::load_into`], writing the dump to `out` instead of stdout.
    pub(crate) fn load_into_with_output<W: Write>(
        &self,
        store: &mut EnvStore,
        out: &mut W,
    ) -> Result<(), LoadError> {
        let path = self.resolve_path()?;

        let file = File::open(&path).map_err(|e| LoadError::OpenFailed {
            path: path.clone(),
            source: e,
        })?;

        let applied = self.apply_lines(BufReader::new(file), &path, store)?;
        tracing::debug!(path = %path.display(), entries = applied, "Loaded env file");

        if !self.hide_output
            && let Err(e) = write_summary(store, out)
        {
            tracing::warn!(error = %e, "Could not write env summary");
        }

        Ok(())
    }

    fn apply_lines<R: BufRead>(
        &self,
        reader: R,
        path: &Path,
        store: &mut EnvStore,
    ) -> Result<usize, LoadError> {
        let mut applied = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|e| LoadError::ScanFailed {
                path: path.to_path_buf(),
                line: line_no,
                source: e,
            })?;

            match parse_line(&line) {
                ParsedLine::Blank | ParsedLine::Comment => {}
                ParsedLine::Malformed => {
                    tracing::warn!(
                        path = %path.display(),
                        line = line_no,
                        "Skipping env file line without '=' delimiter"
                    );
                }
                ParsedLine::Entry { key, value } => {
                    let env_value = if self.override_from_env {
                        override_value(key)
                    } else {
                        None
                    };
                    let value = match env_value {
                        Some(env_value) => {
                            tracing::debug!(key, "Process environment overrides env file value");
                            env_value
                        }
                        None => value.to_string(),
                    };
                    store.insert(key, value);
                    applied += 1;
                }
            }
        }

        Ok(applied)
    }
}
