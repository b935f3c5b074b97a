//! The tree walker: one depth-first, pre-order pass per scan.
//!
//! Section order is fixed and load-bearing — it decides which staging of a
//! shortcode gets to enrich the display name first, and enrichment never
//! overwrites a non-empty name with an empty one.

mod flat;
mod mo;
mod stories;

use std::path::Path;

use magpie_model::{ContentRecord, SlotTables};
use magpie_patterns::PatternCatalog;

use crate::builder::ItemBuilder;
use crate::fs;

/// Mutable state of one scan pass: the emitted records, in traversal order,
/// and a tally of entries no recognizer claimed.
pub(crate) struct ScanPass<'a> {
    pub(crate) catalog: &'a PatternCatalog,
    pub(crate) tables: &'a SlotTables,
    pub(crate) builder: ItemBuilder<'a>,
    pub(crate) records: Vec<ContentRecord>,
    pub(crate) unmatched: u64,
}

impl<'a> ScanPass<'a> {
    pub(crate) fn new(catalog: &'a PatternCatalog, tables: &'a SlotTables, builder: ItemBuilder<'a>) -> Self {
        Self { catalog, tables, builder, records: Vec::new(), unmatched: 0 }
    }

    /// Scans a checks-layout tree: Stories, then P&V, then Additional/MO.
    pub(crate) fn scan_checks_layout(&mut self, checks_root: &Path) {
        let stories = checks_root.join("Stories");
        if stories.is_dir() {
            self.scan_stories(&stories);
        }
        let posts_videos = checks_root.join("P&V");
        if posts_videos.is_dir() {
            self.scan_posts_videos(&posts_videos);
        }
        let mo = checks_root.join("Additional").join("MO");
        if mo.is_dir() {
            self.scan_mo_additional(&mo);
        }
    }

    /// Scans a supplementary-layout tree: Categories, Reshares, Manual,
    /// Profile, then VE.
    pub(crate) fn scan_supplementary_layout(&mut self, root: &Path) {
        let categories = root.join("Categories");
        if categories.is_dir() {
            self.scan_categories(&categories);
        }
        let reshares = root.join("Reshares");
        if reshares.is_dir() {
            self.scan_reshares(&reshares);
        }
        let manual = root.join("Manual");
        if manual.is_dir() {
            self.scan_manual(&manual);
        }
        let profile = root.join("Profile");
        if profile.is_dir() {
            self.scan_profile_shots(&profile);
        }
        let ve = root.join("VE");
        if ve.is_dir() {
            self.scan_video_evidence(&ve);
        }
    }

    /// Name of a path as the catalog sees it.
    pub(crate) fn name_of(path: &Path) -> String {
        fs::name_of(path)
    }
}
