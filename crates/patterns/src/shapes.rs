//! Structured fields extracted by each recognizer.
//!
//! These are transient: the walker hands them to the item builder, which
//! consumes them while assembling a [`ContentRecord`](magpie_model::ContentRecord).

use std::fmt::{Display, Formatter, Result as FmtResult};

use magpie_model::MediaType;

/// The role a file plays inside a story file triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoryRole {
    /// The downloaded media itself. Canonical: its extension decides the
    /// group's media type.
    Raw,
    /// A screen recording of the story being viewed.
    ScreenCapture,
    /// A still screenshot of the story.
    Screenshot,
}
impl StoryRole {
    pub(crate) fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "raw" => Some(Self::Raw),
            "screencapture" => Some(Self::ScreenCapture),
            "screenshot" => Some(Self::Screenshot),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StoryRole::Raw => "raw",
            StoryRole::ScreenCapture => "screencapture",
            StoryRole::Screenshot => "screenshot",
        }
    }
}
impl Display for StoryRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Fields of a story file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryFile {
    /// Handle: the last space-separated token of the name prefix.
    pub username: String,
    /// Display name: the leading prefix tokens, empty when the prefix is the
    /// handle alone.
    pub full_name: String,
    pub shortcode: String,
    /// Eight-digit posted date, as written.
    pub date: String,
    /// Six-digit posted time, as written.
    pub time: String,
    /// Two-digit sequence within the day's stories.
    pub seq: String,
    pub role: StoryRole,
    /// File extension, without the dot.
    pub ext: String,
}
impl StoryFile {
    /// Media type of the group this file belongs to, decided only by the
    /// canonical raw-role file.
    pub fn media_type(&self) -> Option<MediaType> {
        match self.role {
            StoryRole::Raw => MediaType::from_extension(&self.ext),
            _ => None,
        }
    }
}

/// Fields of a post folder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFolder {
    pub username: String,
    /// Eight-digit posted date, as written.
    pub date: String,
    /// Native shortcode, with any collaborator suffix stripped.
    pub shortcode: String,
    /// Collaborator handles from the `_collab_` suffix, if any.
    pub collaborators: Vec<String>,
    pub paired: bool,
}

/// Fields of a profile folder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFolder {
    /// Calendar date, already `YYYY-MM-DD`.
    pub date: String,
    pub full_name: String,
    pub handle: String,
}

/// Fields of a comment thread folder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentFolder {
    pub date: String,
    pub handle: String,
    pub paired: bool,
}

/// Fields of a named story folder name (including the TXT variant, which
/// carries no display name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedStoryFolder {
    pub date: String,
    pub full_name: String,
    pub handle: String,
}

/// Fields of a reshare folder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReshareFolder {
    pub date: String,
    pub full_name: String,
    pub handle: String,
}

/// Fields of a video-evidence file name. The date portion is free text (it
/// may span several days) and is carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoEvidenceFile {
    pub date_text: String,
    pub full_name: String,
    pub handle: String,
}

/// Fields of a profile screenshot file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileShotFile {
    pub username: String,
    /// Eight-digit date, as written.
    pub date: String,
}
