//! Naming-convention recognizers for magpie.
//!
//! An ordered [`PatternCatalog`] of pure predicate+extractor pairs over folder
//! and file names, plus the companion-metadata document reader and the
//! deterministic pseudo-identifier generator. Nothing in the match path
//! touches the filesystem; classification is a function of the name alone.

mod catalog;
mod companion;
mod consts;
pub mod error;
mod parse;
mod pseudo;
mod shapes;

pub use self::catalog::{NameKind, PatternCatalog, Recognition, Recognize};
pub use self::companion::{COMPANION_SUFFIX, CompanionMetadata, is_companion_file, read_companion};
pub use self::parse::{
    PAIRED_MARKER, format_date, parse_checks_dir, parse_comment_folder, parse_named_story_folder, parse_post_folder,
    parse_profile_file, parse_profile_folder, parse_reshare_folder, parse_site_code, parse_story_filename,
    parse_ve_file,
};
pub use self::pseudo::pseudo_shortcode;
pub use self::shapes::{
    CommentFolder, NamedStoryFolder, PostFolder, ProfileFolder, ProfileShotFile, ReshareFolder, StoryFile, StoryRole,
    VideoEvidenceFile,
};
