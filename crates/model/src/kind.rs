use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use super::sanitize;
use crate::error::{Error, ErrorKind};

/// The logical shape of a piece of archived content.
///
/// The set is open by design — new naming conventions add variants here and a
/// recognizer in the pattern catalog, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// A single story, reconstructed from its raw/capture/screenshot file triple.
    Story,
    /// A downloaded post folder (media, comments, companion metadata).
    Post,
    /// A folder of loosely-related story files archived as one unit.
    StoryCollection,
    /// A profile snapshot folder.
    Profile,
    /// A single profile screenshot file.
    ProfileSnapshot,
    /// A comment thread folder.
    CommentThread,
    /// A standalone video-evidence recording.
    VideoEvidence,
}
impl ContentKind {
    /// Returns the label written to the row's post-type column.
    ///
    /// [`ContentKind::ProfileSnapshot`] deliberately shares the `"Profile"`
    /// label with [`ContentKind::Profile`]: the sheet does not distinguish a
    /// snapshot file from a snapshot folder.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Story => "Story",
            ContentKind::Post => "Post",
            ContentKind::StoryCollection => "Story Collection",
            ContentKind::Profile | ContentKind::ProfileSnapshot => "Profile",
            ContentKind::CommentThread => "Comment Thread",
            ContentKind::VideoEvidence => "VE",
        }
    }
}
impl TryFrom<String> for ContentKind {
    type Error = Error;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.as_str().parse()
    }
}
impl FromStr for ContentKind {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sanitized = sanitize(s);
        Ok(match sanitized.as_str() {
            "story" | "stories" => Self::Story,
            "post" | "igpost" => Self::Post,
            "storycollection" => Self::StoryCollection,
            "profile" => Self::Profile,
            "profilesnapshot" | "profilescreenshot" => Self::ProfileSnapshot,
            "commentthread" | "comment" => Self::CommentThread,
            "ve" | "videoevidence" => Self::VideoEvidence,
            _ => exn::bail!(ErrorKind::ParseError {
                field: "content_kind",
                value: format!("unknown content kind: {}", s)
            }),
        })
    }
}

impl Display for ContentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
