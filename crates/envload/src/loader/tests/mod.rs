//! Tests for the environment loader.
//!
//! Responsibilities:
//! - Test parsing and merging of whole files into a store.
//! - Test override mode and environment fallback.
//! - Test path resolution through the working and base directories.
//! - Test error variants and best-effort behaviour on read failures.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests that change the working directory hold `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::TempDir;

use crate::loader::builder::EnvLoader;

pub mod resolve_tests;

/// Returns the global test lock for process-global state isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write `content` to `name` inside `dir` and return its path.
pub fn write_env_file(dir: &TempDir, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write env file");
    path
}

/// A quiet loader for `path` whose executable-relative lookup is pinned to `path`'s directory.
pub fn quiet_loader(path: &Path) -> EnvLoader {
    let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
    EnvLoader::new()
        .with_path(path)
        .with_hide_output(true)
        .with_base_dir(base)
}
