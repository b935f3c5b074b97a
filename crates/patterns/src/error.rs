//! Pattern Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A pattern error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for pattern operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// Almost everything in this crate degrades instead of failing: a name that
/// matches no shape is `None`, not an error. These kinds cover the one place
/// that genuinely reads a document from disk.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// The companion metadata document could not be read.
    #[display("unreadable companion metadata document")]
    UnreadableDocument,
    /// The companion metadata document is not valid JSON.
    #[display("malformed companion metadata document")]
    MalformedDocument,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::UnreadableDocument)
    }
}
