//! The companion metadata document downloaders drop next to post media.
//!
//! One JSON document per post-like folder, discovered by suffix. Fields the
//! document carries win over anything derived from the folder name; a missing,
//! unreadable or malformed document degrades to "no companion metadata".

use std::path::Path;

use exn::ResultExt;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{ErrorKind, Result};

/// File-name suffix identifying a companion document.
pub const COMPANION_SUFFIX: &str = "_metadata.json";

/// Returns `true` if the file name identifies a companion document.
pub fn is_companion_file(filename: &str) -> bool {
    filename.ends_with(COMPANION_SUFFIX)
}

/// Parsed companion document. Every field is optional in the document itself;
/// absent fields deserialize to their empty value so precedence checks can
/// treat "absent" and "empty" the same way.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompanionMetadata {
    pub username: String,
    pub full_name: String,
    pub shortcode: String,
    pub caption: String,
    pub like_count: u64,
    pub comment_count: u64,
    /// ISO-8601-like posted timestamp.
    pub posted_at: String,
    pub media_type: String,
    pub is_video: bool,
    pub post_url: String,
    pub post_type: String,
    pub collaborators: Vec<String>,
}
impl CompanionMetadata {
    /// The calendar-date portion of the posted timestamp (its first ten
    /// characters), empty when the timestamp is absent or too short.
    pub fn posted_date(&self) -> &str {
        self.posted_at.get(..10).unwrap_or_default()
    }
}

/// Reads and parses a companion document.
///
/// # Errors
/// [`ErrorKind::UnreadableDocument`] when the file cannot be read,
/// [`ErrorKind::MalformedDocument`] when it is not valid JSON. Callers treat
/// both as "no metadata" and keep going.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_companion(path: impl AsRef<Path>) -> Result<CompanionMetadata> {
    let text = std::fs::read_to_string(path.as_ref()).or_raise(|| ErrorKind::UnreadableDocument)?;
    serde_json::from_str(&text).or_raise(|| ErrorKind::MalformedDocument)
}
