//! The ordered catalog of naming-convention recognizers.
//!
//! Precedence is declared by position in [`PatternCatalog::default`], not by
//! accident of call-site ordering. Every recognizer is a pure predicate +
//! extractor over the name string; the catalog never consults the filesystem.
//! The shapes are constructed so no two recognizers of the same [`NameKind`]
//! match the same literal name — `test_recognizers_are_unambiguous` holds the
//! catalog to that.

use crate::parse;
use crate::shapes::{
    CommentFolder, NamedStoryFolder, PostFolder, ProfileFolder, ProfileShotFile, ReshareFolder, StoryFile,
    VideoEvidenceFile,
};

/// Whether a name names a directory or a file. Folder shapes never match
/// files and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Folder,
    File,
}

/// The outcome of a successful catalog match: which shape matched, carrying
/// only the fields that shape extracts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recognition {
    Story(StoryFile),
    Post(PostFolder),
    Profile(ProfileFolder),
    CommentThread(CommentFolder),
    NamedStory(NamedStoryFolder),
    Reshare(ReshareFolder),
    VideoEvidence(VideoEvidenceFile),
    ProfileShot(ProfileShotFile),
}

/// One naming-convention recognizer: a predicate and extractor over a name.
pub trait Recognize {
    /// Stable label for diagnostics.
    fn label(&self) -> &'static str;
    /// Which kind of directory entry this shape applies to.
    fn kind(&self) -> NameKind;
    /// Tests the name against the shape, extracting its fields on a match.
    fn try_match(&self, name: &str) -> Option<Recognition>;
}

macro_rules! recognizer {
    ($type:ident, $label:literal, $kind:expr, $parser:path, $variant:expr) => {
        struct $type;
        impl Recognize for $type {
            fn label(&self) -> &'static str {
                $label
            }
            fn kind(&self) -> NameKind {
                $kind
            }
            fn try_match(&self, name: &str) -> Option<Recognition> {
                $parser(name).map($variant)
            }
        }
    };
}

recognizer!(PostRecognizer, "post folder", NameKind::Folder, parse::parse_post_folder, Recognition::Post);
recognizer!(ProfileRecognizer, "profile folder", NameKind::Folder, parse::parse_profile_folder, Recognition::Profile);
recognizer!(
    CommentRecognizer,
    "comment thread folder",
    NameKind::Folder,
    parse::parse_comment_folder,
    Recognition::CommentThread
);
recognizer!(
    NamedStoryRecognizer,
    "named story folder",
    NameKind::Folder,
    parse::parse_named_story_folder,
    Recognition::NamedStory
);
recognizer!(ReshareRecognizer, "reshare folder", NameKind::Folder, parse::parse_reshare_folder, Recognition::Reshare);
recognizer!(StoryFileRecognizer, "story file", NameKind::File, parse::parse_story_filename, Recognition::Story);
recognizer!(
    VideoEvidenceRecognizer,
    "video evidence file",
    NameKind::File,
    parse::parse_ve_file,
    Recognition::VideoEvidence
);
recognizer!(
    ProfileShotRecognizer,
    "profile screenshot file",
    NameKind::File,
    parse::parse_profile_file,
    Recognition::ProfileShot
);

/// The fixed, ordered recognizer set.
pub struct PatternCatalog {
    recognizers: Vec<Box<dyn Recognize + Send + Sync>>,
}
impl Default for PatternCatalog {
    /// Folder shapes first, in walker precedence order, then file shapes.
    fn default() -> Self {
        Self {
            recognizers: vec![
                Box::new(PostRecognizer),
                Box::new(ProfileRecognizer),
                Box::new(CommentRecognizer),
                Box::new(NamedStoryRecognizer),
                Box::new(ReshareRecognizer),
                Box::new(StoryFileRecognizer),
                Box::new(VideoEvidenceRecognizer),
                Box::new(ProfileShotRecognizer),
            ],
        }
    }
}
impl PatternCatalog {
    /// Tries every recognizer of the given kind, in priority order.
    pub fn classify(&self, name: &str, kind: NameKind) -> Option<Recognition> {
        self.recognizers.iter().filter(|r| r.kind() == kind).find_map(|r| r.try_match(name))
    }

    /// Whether the name matches any shape of either kind.
    ///
    /// Used by context propagation: a content-shaped name at a refinement
    /// position stops the context from absorbing it.
    pub fn is_content_name(&self, name: &str) -> bool {
        self.recognizers.iter().any(|r| r.try_match(name).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a_IG_POST_20240101_SC", NameKind::Folder)]
    #[case("IG Profile - 2024-01-01 - Jane - @jane", NameKind::Folder)]
    #[case("IG Regular Comment - 2024-01-01 - @jane", NameKind::Folder)]
    #[case("IG Stories - 2024-01-01 - Jane - jane", NameKind::Folder)]
    #[case("IG Stories TXT - 2024-01-01 - @jane", NameKind::Folder)]
    #[case("IG Reshare - 2024-01-01 - Jane - jane", NameKind::Folder)]
    #[case("alice_story_20240101_120000_01_abc_raw.mp4", NameKind::File)]
    #[case("IG VE - 2024-01-01 - Jane - jane.MP4", NameKind::File)]
    #[case("jane_profile_20240101.png", NameKind::File)]
    fn test_recognizers_are_unambiguous(#[case] name: &str, #[case] kind: NameKind) {
        let catalog = PatternCatalog::default();
        let matched: Vec<&'static str> = catalog
            .recognizers
            .iter()
            .filter(|r| r.kind() == kind)
            .filter(|r| r.try_match(name).is_some())
            .map(|r| r.label())
            .collect();
        assert_eq!(matched.len(), 1, "{name:?} matched {matched:?}");
        assert!(catalog.is_content_name(name));
    }

    #[rstest]
    #[case("Batch 1")]
    #[case("Books")]
    #[case("WPAS ABC")]
    #[case("Community")]
    fn test_context_folders_are_not_content(#[case] name: &str) {
        assert!(!PatternCatalog::default().is_content_name(name));
    }

    #[test]
    fn test_classify_respects_name_kind() {
        let catalog = PatternCatalog::default();
        let story = "alice_story_20240101_120000_01_abc_raw.mp4";
        assert!(catalog.classify(story, NameKind::Folder).is_none());
        assert!(matches!(catalog.classify(story, NameKind::File), Some(Recognition::Story(_))));
    }

    #[test]
    fn test_classify_extracts_fields() {
        let catalog = PatternCatalog::default();
        match catalog.classify("a_IG_POST_20240101_SC - PAIRED", NameKind::Folder) {
            Some(Recognition::Post(post)) => {
                assert_eq!(post.shortcode, "SC");
                assert!(post.paired);
            },
            other => panic!("expected a post match, got {other:?}"),
        }
    }
}
