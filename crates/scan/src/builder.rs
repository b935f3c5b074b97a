//! Record assembly.
//!
//! Combines a matched path, its extracted name fields, the inherited context
//! frame, and (for posts) the companion metadata document into a finalized
//! [`ContentRecord`] with its destination path computed.
//!
//! Field precedence: companion metadata (non-empty fields) over
//! filename-derived fields over context defaults.

use std::path::Path;

use magpie_model::{ContentKind, ContentRecord, Section, SourceKind};
use magpie_patterns::{
    CommentFolder, CompanionMetadata, NamedStoryFolder, PostFolder, ProfileFolder, ProfileShotFile, ReshareFolder,
    VideoEvidenceFile, format_date, is_companion_file, pseudo_shortcode, read_companion,
};

use crate::fs;
use crate::groups::StoryGroup;

/// Label written to the sheet-categories column for reshared content.
const RESHARE_CATEGORY: &str = "Reshare";

/// Assembles finalized records for one scan pass.
///
/// Carries the per-scan constants (archive root, scan-date stamp, archiver
/// initials, source layout) so the walker only supplies what varies per
/// record.
pub(crate) struct ItemBuilder<'a> {
    archive_root: &'a Path,
    timestamp: &'a str,
    downloader: &'a str,
    source_kind: SourceKind,
}

impl<'a> ItemBuilder<'a> {
    pub(crate) fn new(archive_root: &'a Path, timestamp: &'a str, downloader: &'a str, source_kind: SourceKind) -> Self {
        Self { archive_root, timestamp, downloader, source_kind }
    }

    fn base(&self, kind: ContentKind, section: Section) -> ContentRecord {
        let mut record = ContentRecord::new(kind, self.source_kind, section);
        record.timestamp = self.timestamp.to_string();
        record.downloader = self.downloader.to_string();
        record
    }

    /// Builds a record from a post folder.
    ///
    /// When the folder contains a companion metadata document, its non-empty
    /// fields win over everything derived from the folder name.
    pub(crate) fn build_post(&self, folder: &Path, parsed: &PostFolder, section: Section) -> ContentRecord {
        let folder_name = fs::name_of(folder);
        let companion = self.find_companion(folder);
        let meta = companion.clone().unwrap_or_default();

        let mut record = self.base(ContentKind::Post, section);
        record.username = pick(&meta.username, &parsed.username);
        record.shortcode = pick(&meta.shortcode, &parsed.shortcode);
        record.real_name = meta.full_name.clone();
        record.post_date = pick(meta.posted_date(), &format_date(&parsed.date));
        record.manual_notes = meta.caption.clone();
        record.collaborators = if meta.collaborators.is_empty() {
            parsed.collaborators.join(", ")
        } else {
            meta.collaborators.join(", ")
        };
        if parsed.paired {
            record.paired_content = "Yes".to_string();
        }
        record.db_link = primary_media_link(folder);
        record.source_files = fs::collect_files(folder);
        record.source_path = Some(folder.to_path_buf());
        record.is_folder_item = true;
        record.has_companion_metadata = companion.is_some();
        record.destination_path = self.archive_root.join(&record.username).join(&folder_name);
        record
    }

    /// Builds a record from a profile folder.
    pub(crate) fn build_profile(&self, folder: &Path, parsed: &ProfileFolder, section: Section) -> ContentRecord {
        let mut record =
            self.folder_record(ContentKind::Profile, section, folder, &parsed.handle, &parsed.date);
        record.real_name = parsed.full_name.clone();
        record
    }

    /// Builds a record from a comment thread folder.
    pub(crate) fn build_comment(&self, folder: &Path, parsed: &CommentFolder, section: Section) -> ContentRecord {
        let mut record =
            self.folder_record(ContentKind::CommentThread, section, folder, &parsed.handle, &parsed.date);
        if parsed.paired {
            record.paired_content = "Yes".to_string();
        }
        record
    }

    /// Builds a record from a named story folder archived as one unit.
    pub(crate) fn build_named_story(&self, folder: &Path, parsed: &NamedStoryFolder, section: Section) -> ContentRecord {
        let mut record =
            self.folder_record(ContentKind::StoryCollection, section, folder, &parsed.handle, &parsed.date);
        record.real_name = parsed.full_name.clone();
        record
    }

    /// Builds a record from a reshare folder archived as one unit.
    pub(crate) fn build_reshare_collection(
        &self,
        folder: &Path,
        parsed: &ReshareFolder,
        section: Section,
    ) -> ContentRecord {
        let mut record =
            self.folder_record(ContentKind::StoryCollection, section, folder, &parsed.handle, &parsed.date);
        record.real_name = parsed.full_name.clone();
        record.sheet_categories = RESHARE_CATEGORY.to_string();
        record.resharer_username = parsed.handle.clone();
        record.resharer_name = parsed.full_name.clone();
        record
    }

    /// Builds a record from a finalized story group.
    pub(crate) fn build_story_group(&self, group: StoryGroup, section: Section) -> ContentRecord {
        let mut record = self.base(ContentKind::Story, section);
        record.shortcode = group.shortcode.clone();
        record.username = group.username.clone();
        record.real_name = group.full_name.clone();
        record.post_date = format_date(&group.date);
        record.media_type = group.media_type;
        record.db_link = group.files.first().map(|f| f.display().to_string()).unwrap_or_default();
        record.destination_path = self
            .archive_root
            .join(&group.username)
            .join(format!("{}_story_{}", group.username, group.shortcode));
        record.source_path = group.parent_dir.clone();
        record.source_files = group.files;
        record.is_folder_item = false;
        if section == Section::Reshares {
            record.sheet_categories = RESHARE_CATEGORY.to_string();
        }
        group.frame.apply(&mut record);
        record
    }

    /// Builds a record from a single profile screenshot file.
    pub(crate) fn build_profile_shot(&self, file: &Path, parsed: &ProfileShotFile, section: Section) -> ContentRecord {
        let date = format_date(&parsed.date);
        self.file_record(ContentKind::ProfileSnapshot, section, file, &parsed.username, &date)
    }

    /// Builds a record from a single video-evidence file.
    pub(crate) fn build_video_evidence(
        &self,
        file: &Path,
        parsed: &VideoEvidenceFile,
        section: Section,
    ) -> ContentRecord {
        let mut record = self.file_record(ContentKind::VideoEvidence, section, file, &parsed.handle, &parsed.date_text);
        record.real_name = parsed.full_name.clone();
        record
    }

    /// Common assembly for records that own a whole folder: pseudo-identity
    /// from the folder name, destination reusing the folder name verbatim.
    fn folder_record(
        &self,
        kind: ContentKind,
        section: Section,
        folder: &Path,
        handle: &str,
        date: &str,
    ) -> ContentRecord {
        let folder_name = fs::name_of(folder);
        let mut record = self.base(kind, section);
        record.username = handle.to_string();
        record.post_date = date.to_string();
        record.shortcode = pseudo_shortcode(handle, date, &folder_name);
        record.source_files = fs::collect_files(folder);
        record.source_path = Some(folder.to_path_buf());
        record.is_folder_item = true;
        record.destination_path = self.archive_root.join(handle).join(&folder_name);
        record
    }

    /// Common assembly for records that own a single loose file.
    fn file_record(
        &self,
        kind: ContentKind,
        section: Section,
        file: &Path,
        handle: &str,
        date: &str,
    ) -> ContentRecord {
        let file_name = fs::name_of(file);
        let mut record = self.base(kind, section);
        record.username = handle.to_string();
        record.post_date = date.to_string();
        record.shortcode = pseudo_shortcode(handle, date, &file_name);
        record.db_link = file.display().to_string();
        record.source_files = vec![file.to_path_buf()];
        record.source_path = Some(file.to_path_buf());
        record.is_folder_item = false;
        record.destination_path = self.archive_root.join(handle).join(&file_name);
        record
    }

    /// Finds and reads the folder's companion metadata document, if any.
    ///
    /// Unreadable or malformed documents degrade to `None` with a warning;
    /// classification proceeds on filename-derived fields alone.
    fn find_companion(&self, folder: &Path) -> Option<CompanionMetadata> {
        let path = fs::collect_files(folder).into_iter().find(|f| is_companion_file(&fs::name_of(f)))?;
        match read_companion(&path) {
            Ok(meta) => Some(meta),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "ignoring unusable companion metadata");
                None
            },
        }
    }
}

/// Companion-over-filename precedence for a single field.
fn pick(preferred: &str, fallback: &str) -> String {
    if preferred.is_empty() { fallback.to_string() } else { preferred.to_string() }
}

/// First file of the folder's `media/` child, as the row's link column.
fn primary_media_link(folder: &Path) -> String {
    let media_dir = folder.join("media");
    if !media_dir.is_dir() {
        return String::new();
    }
    fs::list_dir(&media_dir).files.first().map(|f| f.display().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use magpie_model::MediaType;
    use magpie_patterns::parse_post_folder;
    use std::fs as stdfs;
    use std::path::PathBuf;

    fn builder(root: &Path) -> ItemBuilder<'_> {
        ItemBuilder::new(root, "2024-06-01", "AB", SourceKind::SatDaily)
    }

    fn make_post_folder(parent: &Path, name: &str, metadata: Option<&str>) -> PathBuf {
        let folder = parent.join(name);
        stdfs::create_dir_all(folder.join("media")).unwrap();
        stdfs::write(folder.join("media/01.jpg"), b"jpg").unwrap();
        if let Some(json) = metadata {
            stdfs::write(folder.join("post_metadata.json"), json).unwrap();
        }
        folder
    }

    #[test]
    fn test_post_without_companion_uses_filename_fields() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("archive");
        let folder = make_post_folder(tmp.path(), "jane_IG_POST_20240102_SC1", None);
        let parsed = parse_post_folder("jane_IG_POST_20240102_SC1").unwrap();

        let record = builder(&root).build_post(&folder, &parsed, Section::PostsVideos);
        assert_eq!(record.username, "jane");
        assert_eq!(record.shortcode, "SC1");
        assert_eq!(record.post_date, "2024-01-02");
        assert_eq!(record.timestamp, "2024-06-01");
        assert_eq!(record.downloader, "AB");
        assert!(!record.has_companion_metadata);
        assert!(record.is_folder_item);
        assert_eq!(record.destination_path, root.join("jane").join("jane_IG_POST_20240102_SC1"));
        assert!(record.db_link.ends_with("01.jpg"));
        assert_eq!(record.source_files.len(), 1);
    }

    #[test]
    fn test_companion_fields_win_over_filename_fields() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("archive");
        let json = r#"{
            "username": "realjane",
            "full_name": "Jane Doe",
            "shortcode": "REAL1",
            "caption": "hello world",
            "posted_at": "2024-02-03T09:00:00Z",
            "collaborators": ["friend"]
        }"#;
        let folder = make_post_folder(tmp.path(), "jane_IG_POST_20240102_SC1_collab_other", Some(json));
        let parsed = parse_post_folder("jane_IG_POST_20240102_SC1_collab_other").unwrap();

        let record = builder(&root).build_post(&folder, &parsed, Section::PostsVideos);
        assert_eq!(record.username, "realjane");
        assert_eq!(record.shortcode, "REAL1");
        assert_eq!(record.real_name, "Jane Doe");
        assert_eq!(record.post_date, "2024-02-03");
        assert_eq!(record.manual_notes, "hello world");
        assert_eq!(record.collaborators, "friend");
        assert!(record.has_companion_metadata);
        assert_eq!(record.destination_path, root.join("realjane").join("jane_IG_POST_20240102_SC1_collab_other"));
    }

    #[test]
    fn test_malformed_companion_degrades_to_filename_fields() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("archive");
        let folder = make_post_folder(tmp.path(), "jane_IG_POST_20240102_SC1", Some("{ not json"));
        let parsed = parse_post_folder("jane_IG_POST_20240102_SC1").unwrap();

        let record = builder(&root).build_post(&folder, &parsed, Section::PostsVideos);
        assert_eq!(record.username, "jane");
        assert_eq!(record.shortcode, "SC1");
        assert!(!record.has_companion_metadata);
    }

    #[test]
    fn test_folder_record_reuses_folder_name_in_destination() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("archive");
        let name = "IG Profile - 2024-03-01 - Jane Doe - @jane";
        let folder = tmp.path().join(name);
        stdfs::create_dir(&folder).unwrap();
        stdfs::write(folder.join("profile.png"), b"png").unwrap();
        let parsed = magpie_patterns::parse_profile_folder(name).unwrap();

        let record = builder(&root).build_profile(&folder, &parsed, Section::Stories);
        assert_eq!(record.username, "jane");
        assert_eq!(record.real_name, "Jane Doe");
        assert!(record.shortcode.starts_with("NOID_jane_2024-03-01_"));
        assert_eq!(record.destination_path, root.join("jane").join(name));
        assert_eq!(record.source_files.len(), 1);
    }

    #[test]
    fn test_story_group_synthesizes_destination_folder() {
        let root = PathBuf::from("/archive");
        let mut acc = crate::groups::GroupAccumulator::default();
        let name = "alice_story_20240101_120000_01_abc123_raw.mp4";
        let parsed = magpie_patterns::parse_story_filename(name).unwrap();
        acc.stage(Path::new("/src/alice_story_20240101_120000_01_abc123_raw.mp4"), &parsed, Default::default());
        let group = acc.finalize().next().unwrap();

        let record = builder(&root).build_story_group(group, Section::Stories);
        assert_eq!(record.kind, ContentKind::Story);
        assert_eq!(record.destination_path, root.join("alice").join("alice_story_abc123"));
        assert_eq!(record.media_type, Some(MediaType::Video));
        assert_eq!(record.post_date, "2024-01-01");
        assert_eq!(record.db_link, "/src/alice_story_20240101_120000_01_abc123_raw.mp4");
    }

    #[test]
    fn test_pseudo_identity_is_reproducible() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("archive");
        let name = "IG Stories - 2024-05-06 - Jane - jane";
        let folder = tmp.path().join(name);
        stdfs::create_dir(&folder).unwrap();
        let parsed = magpie_patterns::parse_named_story_folder(name).unwrap();

        let first = builder(&root).build_named_story(&folder, &parsed, Section::Manual);
        let second = builder(&root).build_named_story(&folder, &parsed, Section::Manual);
        assert_eq!(first.shortcode, second.shortcode);
    }
}
