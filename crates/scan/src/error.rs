//! Scan Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.
//!
//! Nearly everything during a walk degrades to "skip and continue" — an
//! unreadable subtree contributes zero records, a malformed companion document
//! contributes no metadata. The kinds below are the conditions that make a
//! walk impossible to even start.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A scan error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for scan operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// The root directory name matches no recognized source layout.
    #[display("unrecognized source layout: {}", _0.display())]
    UnrecognizedLayout(#[error(not(source))] PathBuf),
    /// A checks-layout root has no checks subdirectory to scan.
    #[display("no checks subdirectory found in {}", _0.display())]
    MissingChecksRoot(#[error(not(source))] PathBuf),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
