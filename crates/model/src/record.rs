//! The unit of scan output: one logical piece of content, its files, and the
//! 37-column row the external logger writes.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::{CategorySlot, ContentKind, MediaType, MoSlot, Section, SourceKind};

/// Row column headers, A through AK.
pub const SHEET_HEADERS: [&str; 37] = [
    "Timestamp",
    "Shortcode",
    "Real Name",
    "Username",
    "Post Type",
    "Downloader",
    "Post Date",
    "Collaborators",
    "Manual Notes",
    "DB Link",
    "Paired Content",
    "Stories Reshare Links",
    "Primary Beginning Tags",
    "Secondary Beginning Tags",
    "General Triggers",
    "Sheet Categories",
    "Books",
    "Conditions",
    "Emotional Support",
    "Fear",
    "Food",
    "Healing Stories",
    "Healing Tools",
    "Healing Tools More",
    "History",
    "Miscellaneous",
    "MM Science",
    "Other",
    "PW Trends",
    "Resources",
    "Supporting",
    "MO-Publication",
    "MO-PW",
    "MO-RPT",
    "MO-SI",
    "MO-TS",
    "MO-WTS",
];

/// Tab receiving rows from the stories section.
pub const TAB_STORIES: &str = "Stories";
/// Tab receiving every other section's rows.
pub const TAB_PV_MANUAL: &str = "P&V Manual Backup";

/// A single piece of content discovered by a scan.
///
/// Identity is the `shortcode`: a native code extracted from a name where one
/// exists, otherwise a deterministic pseudo-identifier. Within one scan's
/// output shortcodes are unique — two matches yielding the same shortcode are
/// merged during accumulation, never emitted twice.
///
/// Records are assembled by the scan crate's builder and are not mutated once
/// the walk over their subtree completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRecord {
    // Row columns A-L.
    /// Archive date stamp (`YYYY-MM-DD`), the only non-deterministic field.
    pub timestamp: String,
    /// Content identifier; never empty.
    pub shortcode: String,
    /// Display name of the content owner. May be empty.
    pub real_name: String,
    /// Handle of the content owner. May be empty.
    pub username: String,
    pub kind: ContentKind,
    /// Archiver initials, when the source layout carries them.
    pub downloader: String,
    /// Normalized posted date (`YYYY-MM-DD`).
    pub post_date: String,
    /// Comma-separated collaborator handles.
    pub collaborators: String,
    pub manual_notes: String,
    /// Primary media file path, as the row's link column.
    pub db_link: String,
    /// `"Yes"` when the source name carried the paired marker.
    pub paired_content: String,
    pub stories_reshare_links: String,

    // Row columns M-P, free-text tag slots filled by the operator later.
    pub primary_beginning_tags: String,
    pub secondary_beginning_tags: String,
    pub general_triggers: String,
    pub sheet_categories: String,

    // Row columns Q-AE and AF-AK, keyed dropdown slots.
    categories: BTreeMap<CategorySlot, String>,
    mo: BTreeMap<MoSlot, String>,

    // Scan-internal fields, never written to the row.
    /// The matched folder (folder records) or the first file's parent (groups).
    pub source_path: Option<PathBuf>,
    /// Every file owned by this record. Exclusive: a file belongs to one record.
    pub source_files: Vec<PathBuf>,
    /// `true` when the record is itself a directory rather than loose files.
    pub is_folder_item: bool,
    /// Coarse media classification; for story groups, decided by the
    /// canonical raw-role file's extension.
    pub media_type: Option<MediaType>,
    /// Whether a companion metadata document contributed fields.
    pub has_companion_metadata: bool,
    pub source_kind: SourceKind,
    pub section: Section,
    /// Batch label inherited from the stories tree, when present.
    pub batch: String,
    /// Site code extracted from a labeled-code folder, when present.
    pub wpas_code: String,
    /// Where the external mover should place this record's files.
    pub destination_path: PathBuf,
    pub resharer_username: String,
    pub resharer_name: String,
}

impl ContentRecord {
    /// Creates an empty record of the given kind, found in the given section.
    pub fn new(kind: ContentKind, source_kind: SourceKind, section: Section) -> Self {
        Self {
            timestamp: String::new(),
            shortcode: String::new(),
            real_name: String::new(),
            username: String::new(),
            kind,
            downloader: String::new(),
            post_date: String::new(),
            collaborators: String::new(),
            manual_notes: String::new(),
            db_link: String::new(),
            paired_content: String::new(),
            stories_reshare_links: String::new(),
            primary_beginning_tags: String::new(),
            secondary_beginning_tags: String::new(),
            general_triggers: String::new(),
            sheet_categories: String::new(),
            categories: BTreeMap::new(),
            mo: BTreeMap::new(),
            source_path: None,
            source_files: Vec::new(),
            is_folder_item: false,
            media_type: None,
            has_companion_metadata: false,
            source_kind,
            section,
            batch: String::new(),
            wpas_code: String::new(),
            destination_path: PathBuf::new(),
            resharer_username: String::new(),
            resharer_name: String::new(),
        }
    }

    /// Sets a category dropdown column value.
    pub fn set_category(&mut self, slot: CategorySlot, value: impl Into<String>) {
        self.categories.insert(slot, value.into());
    }

    /// Returns a category column value, empty if unset.
    pub fn category(&self, slot: CategorySlot) -> &str {
        self.categories.get(&slot).map(String::as_str).unwrap_or_default()
    }

    /// Sets an MO dropdown column value.
    pub fn set_mo(&mut self, slot: MoSlot, value: impl Into<String>) {
        self.mo.insert(slot, value.into());
    }

    /// Returns an MO column value, empty if unset.
    pub fn mo(&self, slot: MoSlot) -> &str {
        self.mo.get(&slot).map(String::as_str).unwrap_or_default()
    }

    /// The tab this record's row belongs to.
    pub fn target_tab(&self) -> &'static str {
        match self.section {
            Section::Stories => TAB_STORIES,
            _ => TAB_PV_MANUAL,
        }
    }

    /// Serializes the record as its 37-element row.
    pub fn to_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(SHEET_HEADERS.len());
        row.push(self.timestamp.clone());
        row.push(self.shortcode.clone());
        row.push(self.real_name.clone());
        row.push(self.username.clone());
        row.push(self.kind.as_str().to_string());
        row.push(self.downloader.clone());
        row.push(self.post_date.clone());
        row.push(self.collaborators.clone());
        row.push(self.manual_notes.clone());
        row.push(self.db_link.clone());
        row.push(self.paired_content.clone());
        row.push(self.stories_reshare_links.clone());
        row.push(self.primary_beginning_tags.clone());
        row.push(self.secondary_beginning_tags.clone());
        row.push(self.general_triggers.clone());
        row.push(self.sheet_categories.clone());
        for slot in CategorySlot::ALL {
            row.push(self.category(slot).to_string());
        }
        for slot in MoSlot::ALL {
            row.push(self.mo(slot).to_string());
        }
        row
    }
}
