//! Constants shared by the loader and the diagnostic dump.

/// Path used when the loader is given no path, or an empty one.
pub const DEFAULT_ENV_PATH: &str = ".env";

/// A line whose first character is this marker is a comment.
pub const COMMENT_PREFIX: char = '#';

/// Separates a key from its value. Only the first occurrence counts.
pub const KEY_VALUE_DELIMITER: char = '=';

/// Heading printed above the diagnostic dump.
pub const SUMMARY_HEADER: &str = "ENV LOADED";

/// Border printed around the entries of the diagnostic dump.
pub const SUMMARY_SEPARATOR: &str = "----------";

/// Separator between a key and its value in the diagnostic dump.
pub const SUMMARY_KEY_VALUE_SEPARATOR: &str = "  :  ";
