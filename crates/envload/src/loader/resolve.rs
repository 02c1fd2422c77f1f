//! Path resolution for environment files.
//!
//! Responsibilities:
//! - Find the file to load: the configured path relative to the working
//!   directory first, then relative to the running executable's directory.
//!
//! Does NOT handle:
//! - Opening or reading the file.
//!
//! Invariants:
//! - A failed resolution reports the configured path and the error from the first lookup.
//! - If the executable directory is unknown, only the first lookup is tried.

use std::path::{Path, PathBuf};

use super::error::LoadError;

/// Directory containing the running executable, if it can be determined.
pub(crate) fn executable_dir() -> Option<PathBuf> {
    match std::env::current_exe() {
        Ok(exe) => exe.parent().map(Path::to_path_buf),
        Err(e) => {
            tracing::debug!(error = %e, "Could not determine executable path");
            None
        }
    }
}

/// Resolve `path` to an existing file location.
///
/// `base_dir` is the directory used for the second lookup; callers normally
/// pass [`executable_dir`].
pub(crate) fn resolve_env_path(
    path: &Path,
    base_dir: Option<&Path>,
) -> Result<PathBuf, LoadError> {
    let direct_err = match std::fs::metadata(path) {
        Ok(_) => {
            tracing::debug!(path = %path.display(), "Resolved env file relative to working directory");
            return Ok(path.to_path_buf());
        }
        Err(e) => e,
    };

    if let Some(base) = base_dir {
        let candidate = base.join(path);
        if std::fs::metadata(&candidate).is_ok() {
            tracing::debug!(
                path = %candidate.display(),
                "Resolved env file relative to executable directory"
            );
            return Ok(candidate);
        }
    }

    Err(LoadError::FileNotFound {
        path: path.to_path_buf(),
        source: direct_err,
    })
}
