//! Tests for working-directory and executable-relative resolution.
//!
//! Invariants / Assumptions:
//! - Tests use `env_lock()` to prevent cross-test contamination.
//! - Tests must serialize mutations to process-global state (cwd).

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::{env_lock, write_env_file};
use crate::loader::builder::EnvLoader;
use crate::loader::error::LoadError;

/// RAII guard for temporarily changing the current working directory.
struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

#[test]
fn test_default_path_loads_from_working_directory() {
    let _lock = env_lock().lock().unwrap();
    let cwd = TempDir::new().unwrap();
    let base = TempDir::new().unwrap();
    write_env_file(&cwd, ".env", "FROM=cwd\n");
    write_env_file(&base, ".env", "FROM=base\n");
    let _cwd_guard = CwdGuard::new(&cwd);

    let loader = EnvLoader::new()
        .with_hide_output(true)
        .with_base_dir(base.path());

    assert_eq!(loader.resolve_path().unwrap(), PathBuf::from(".env"));
    let store = loader.load().unwrap();
    assert_eq!(store.get_loaded("FROM"), Some("cwd"));
}

#[test]
fn test_falls_back_to_base_dir_when_missing_in_working_directory() {
    let _lock = env_lock().lock().unwrap();
    let cwd = TempDir::new().unwrap();
    let base = TempDir::new().unwrap();
    write_env_file(&base, ".env", "FROM=base\n");
    let _cwd_guard = CwdGuard::new(&cwd);

    let loader = EnvLoader::new()
        .with_hide_output(true)
        .with_base_dir(base.path());

    assert_eq!(loader.resolve_path().unwrap(), base.path().join(".env"));
    let store = loader.load().unwrap();
    assert_eq!(store.get_loaded("FROM"), Some("base"));
}

#[test]
fn test_relative_subpath_resolves_under_base_dir() {
    let _lock = env_lock().lock().unwrap();
    let cwd = TempDir::new().unwrap();
    let base = TempDir::new().unwrap();
    std::fs::create_dir(base.path().join("config")).unwrap();
    std::fs::write(base.path().join("config").join("app.env"), "NESTED=1\n").unwrap();
    let _cwd_guard = CwdGuard::new(&cwd);

    let store = EnvLoader::new()
        .with_path(Path::new("config").join("app.env"))
        .with_hide_output(true)
        .with_base_dir(base.path())
        .load()
        .unwrap();

    assert_eq!(store.get_loaded("NESTED"), Some("1"));
}

#[test]
fn test_missing_default_file_returns_not_found() {
    let _lock = env_lock().lock().unwrap();
    let cwd = TempDir::new().unwrap();
    let base = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&cwd);

    let result = EnvLoader::new()
        .with_hide_output(true)
        .with_base_dir(base.path())
        .load();

    match result {
        Err(LoadError::FileNotFound { path, .. }) => assert_eq!(path, PathBuf::from(".env")),
        Err(other) => panic!("Missing .env should return FileNotFound, got {}", other),
        Ok(_) => panic!("Missing .env should return FileNotFound, got Ok"),
    }
}
