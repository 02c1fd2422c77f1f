//! Diagnostic dump of a loaded store.
//!
//! The dump looks like:
//!
//! ```text
//! ENV LOADED
//! ----------
//! KEY  :  VALUE
//! ----------
//! ```
//!
//! Entries are written in key order. Values are printed verbatim, so callers
//! holding secrets should load with `hide_output` set.

use std::io::{self, Write};

use crate::constants::{SUMMARY_HEADER, SUMMARY_KEY_VALUE_SEPARATOR, SUMMARY_SEPARATOR};
use crate::store::EnvStore;

/// Write the bordered listing of `store` to `out`.
pub fn write_summary<W: Write>(store: &EnvStore, out: &mut W) -> io::Result<()> {
    writeln!(out, "{SUMMARY_HEADER}")?;
    writeln!(out, "{SUMMARY_SEPARATOR}")?;
    for (key, value) in store.iter() {
        writeln!(out, "{key}{SUMMARY_KEY_VALUE_SEPARATOR}{value}")?;
    }
    writeln!(out, "{SUMMARY_SEPARATOR}")?;
    out.flush()
}
