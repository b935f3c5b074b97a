//! Parsers for the individual naming conventions.
//!
//! Every function here is a pure function of the name string — none of them
//! touch the filesystem. A name that does not fit the shape is `None`, never
//! an error: unknown shapes are expected, not failures.

use crate::consts;
use crate::shapes::{
    CommentFolder, NamedStoryFolder, PostFolder, ProfileFolder, ProfileShotFile, ReshareFolder, StoryFile, StoryRole,
    VideoEvidenceFile,
};

/// The trailing marker linking a record to a companion archived separately.
pub const PAIRED_MARKER: &str = " - PAIRED";

/// Parses a story file name.
pub fn parse_story_filename(filename: &str) -> Option<StoryFile> {
    let captures = consts::STORY_FILE_RE.captures(filename)?;
    let prefix = &captures[1];
    let (full_name, username) = split_story_prefix(prefix);
    Some(StoryFile {
        username: username.to_string(),
        full_name: full_name.to_string(),
        shortcode: captures[5].to_string(),
        date: captures[2].to_string(),
        time: captures[3].to_string(),
        seq: captures[4].to_string(),
        // Infallible: the alternation only admits the three known suffixes.
        role: StoryRole::from_suffix(&captures[6])?,
        ext: captures[7].to_string(),
    })
}

/// Splits a story file prefix into `(display name, handle)`.
///
/// The handle is the last space-separated token; anything before it is the
/// display name. `"Candice Richter loveinhealing"` → `("Candice Richter",
/// "loveinhealing")`; a bare `"evinator"` has no display name.
fn split_story_prefix(prefix: &str) -> (&str, &str) {
    match prefix.rsplit_once(' ') {
        Some((full_name, username)) => (full_name, username),
        None => ("", prefix),
    }
}

/// Parses a post folder name.
///
/// The shortcode capture may carry a trailing `_collab_a_b` convention; it is
/// stripped into the collaborator list so the shortcode stays the native code.
pub fn parse_post_folder(folder_name: &str) -> Option<PostFolder> {
    let captures = consts::POST_FOLDER_RE.captures(folder_name)?;
    let mut shortcode = captures[3].to_string();
    let mut collaborators = Vec::new();
    if let Some(collab) = consts::COLLAB_RE.captures(&shortcode) {
        collaborators = collab[1].split('_').map(str::to_string).collect();
        let suffix_len = collab[0].len();
        shortcode.truncate(shortcode.len() - suffix_len);
    }
    Some(PostFolder {
        username: captures[1].to_string(),
        date: captures[2].to_string(),
        shortcode,
        collaborators,
        paired: folder_name.contains(PAIRED_MARKER),
    })
}

/// Parses a profile folder name.
pub fn parse_profile_folder(folder_name: &str) -> Option<ProfileFolder> {
    let captures = consts::PROFILE_FOLDER_RE.captures(folder_name)?;
    Some(ProfileFolder {
        date: captures[1].to_string(),
        full_name: captures[2].to_string(),
        handle: captures[3].to_string(),
    })
}

/// Parses a comment thread folder name.
pub fn parse_comment_folder(folder_name: &str) -> Option<CommentFolder> {
    let captures = consts::COMMENT_FOLDER_RE.captures(folder_name)?;
    Some(CommentFolder {
        date: captures[1].to_string(),
        handle: captures[2].to_string(),
        paired: folder_name.contains(PAIRED_MARKER),
    })
}

/// Parses a named story folder name, trying the display-name shape first and
/// the TXT variant (which carries no display name) second.
pub fn parse_named_story_folder(folder_name: &str) -> Option<NamedStoryFolder> {
    if let Some(captures) = consts::NAMED_STORY_FOLDER_RE.captures(folder_name) {
        return Some(NamedStoryFolder {
            date: captures[1].to_string(),
            full_name: captures[2].to_string(),
            handle: captures[3].to_string(),
        });
    }
    let captures = consts::STORIES_TXT_FOLDER_RE.captures(folder_name)?;
    Some(NamedStoryFolder {
        date: captures[1].to_string(),
        full_name: String::new(),
        handle: captures[2].to_string(),
    })
}

/// Parses a reshare folder name.
pub fn parse_reshare_folder(folder_name: &str) -> Option<ReshareFolder> {
    let captures = consts::RESHARE_FOLDER_RE.captures(folder_name)?;
    Some(ReshareFolder {
        date: captures[1].to_string(),
        full_name: captures[2].to_string(),
        handle: captures[3].to_string(),
    })
}

/// Parses a video-evidence file name.
pub fn parse_ve_file(filename: &str) -> Option<VideoEvidenceFile> {
    let captures = consts::VE_FILE_RE.captures(filename)?;
    Some(VideoEvidenceFile {
        date_text: captures[1].to_string(),
        full_name: captures[2].to_string(),
        handle: captures[3].to_string(),
    })
}

/// Parses a profile screenshot file name.
pub fn parse_profile_file(filename: &str) -> Option<ProfileShotFile> {
    let captures = consts::PROFILE_FILE_RE.captures(filename)?;
    Some(ProfileShotFile { username: captures[1].to_string(), date: captures[2].to_string() })
}

/// Extracts the site code from a labeled-code folder name (`WPAS {code}`).
pub fn parse_site_code(folder_name: &str) -> Option<&str> {
    consts::WPAS_RE.captures(folder_name).and_then(|c| c.get(1)).map(|m| m.as_str())
}

/// Extracts archiver initials from a checks subdirectory name.
pub fn parse_checks_dir(folder_name: &str) -> Option<&str> {
    consts::CHECKS_DIR_RE.captures(folder_name).and_then(|c| c.get(1)).map(|m| m.as_str())
}

/// Normalizes an eight-digit date to `YYYY-MM-DD`; anything else passes
/// through unchanged (it is either already formatted or free text).
pub fn format_date(date: &str) -> String {
    if date.len() == 8 && date.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}-{}-{}", &date[..4], &date[4..6], &date[6..8])
    } else {
        date.to_string()
    }
}
