//! Minimal `KEY=VALUE` environment file loader.
//!
//! This crate reads a `.env`-style file into an [`EnvStore`], optionally
//! letting live process environment variables override file values, and
//! exposes a getter that falls back to the process environment for keys the
//! file does not define.
//!
//! ```no_run
//! use envload::EnvLoader;
//!
//! let store = EnvLoader::new()
//!     .with_override_from_env(true)
//!     .with_hide_output(true)
//!     .load()?;
//!
//! let database_url = store.get("DATABASE_URL");
//! # let _ = database_url;
//! # Ok::<(), envload::LoadError>(())
//! ```

pub mod constants;
mod loader;
pub mod store;
pub mod summary;

pub use loader::{EnvLoader, LoadError, ParsedLine, parse_line};
pub use store::EnvStore;
