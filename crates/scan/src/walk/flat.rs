//! Sections with fixed, shallow layouts: the checks tree's P&V post folders,
//! and the supplementary tree's reshares, manual collections, profile
//! screenshots, and video evidence.

use std::path::Path;

use magpie_model::{MoSlot, Section};
use magpie_patterns::{
    NameKind, Recognition, parse_profile_file, parse_story_filename, parse_ve_file,
};

use super::ScanPass;
use crate::context::{ContextFrame, Resharer};
use crate::fs;
use crate::groups::GroupAccumulator;

/// Label written to the sheet-categories column for reshared content.
const RESHARE_CATEGORY: &str = "Reshare";

impl ScanPass<'_> {
    /// Scans `P&V/{username}/{post folder}` — a fixed two-level layout of
    /// post folders only.
    pub(super) fn scan_posts_videos(&mut self, pv_root: &Path) {
        for username_dir in &fs::list_dir(pv_root).dirs {
            for post_dir in &fs::list_dir(username_dir).dirs {
                let name = Self::name_of(post_dir);
                match self.catalog.classify(&name, NameKind::Folder) {
                    Some(Recognition::Post(parsed)) => {
                        let record = self.builder.build_post(post_dir, &parsed, Section::PostsVideos);
                        self.records.push(record);
                    },
                    _ => self.unmatched += 1,
                }
            }
        }
    }

    /// Scans `Reshares/{reshare folder}/{category}/…`. The reshare folder
    /// names the resharer; that identity rides down to every record beneath.
    pub(super) fn scan_reshares(&mut self, reshares_root: &Path) {
        let mut accumulator = GroupAccumulator::default();
        for reshare_dir in &fs::list_dir(reshares_root).dirs {
            let resharer = magpie_patterns::parse_reshare_folder(&Self::name_of(reshare_dir))
                .map(|parsed| Resharer { username: parsed.handle, full_name: parsed.full_name });
            for category_dir in &fs::list_dir(reshare_dir).dirs {
                let category_name = Self::name_of(category_dir);
                let mut frame = ContextFrame::for_mo(MoSlot::Pw, category_name);
                if let Some(resharer) = &resharer {
                    frame = frame.with_resharer(resharer.clone());
                }
                self.scan_reshare_category(category_dir, &frame, &mut accumulator);
            }
        }
        for group in accumulator.finalize() {
            let record = self.builder.build_story_group(group, Section::Reshares);
            self.records.push(record);
        }
    }

    /// Scans one category inside a reshare folder: direct post folders, loose
    /// story files, or username directories holding post folders.
    fn scan_reshare_category(&mut self, dir: &Path, frame: &ContextFrame, accumulator: &mut GroupAccumulator) {
        let listing = fs::list_dir(dir);
        for subdir in &listing.dirs {
            let name = Self::name_of(subdir);
            match self.catalog.classify(&name, NameKind::Folder) {
                Some(Recognition::Post(parsed)) => self.push_reshare_post(subdir, &parsed, frame),
                // Anything else is a username directory one level up from
                // its posts.
                _ => self.scan_reshare_username_dir(subdir, frame, accumulator),
            }
        }
        for file in &listing.files {
            match parse_story_filename(&Self::name_of(file)) {
                Some(parsed) => accumulator.stage(file, &parsed, frame.clone()),
                None => self.unmatched += 1,
            }
        }
    }

    fn scan_reshare_username_dir(&mut self, dir: &Path, frame: &ContextFrame, accumulator: &mut GroupAccumulator) {
        let listing = fs::list_dir(dir);
        for subdir in &listing.dirs {
            let name = Self::name_of(subdir);
            match self.catalog.classify(&name, NameKind::Folder) {
                Some(Recognition::Post(parsed)) => self.push_reshare_post(subdir, &parsed, frame),
                _ => self.unmatched += 1,
            }
        }
        for file in &listing.files {
            match parse_story_filename(&Self::name_of(file)) {
                Some(parsed) => accumulator.stage(file, &parsed, frame.clone()),
                None => self.unmatched += 1,
            }
        }
    }

    fn push_reshare_post(&mut self, folder: &Path, parsed: &magpie_patterns::PostFolder, frame: &ContextFrame) {
        let mut record = self.builder.build_post(folder, parsed, Section::Reshares);
        record.sheet_categories = RESHARE_CATEGORY.to_string();
        frame.apply(&mut record);
        self.records.push(record);
    }

    /// Scans `Manual/` — named story collections and reshare folders archived
    /// whole, one record per folder.
    pub(super) fn scan_manual(&mut self, manual_root: &Path) {
        for subdir in &fs::list_dir(manual_root).dirs {
            let name = Self::name_of(subdir);
            match self.catalog.classify(&name, NameKind::Folder) {
                Some(Recognition::NamedStory(parsed)) => {
                    let record = self.builder.build_named_story(subdir, &parsed, Section::Manual);
                    self.records.push(record);
                },
                Some(Recognition::Reshare(parsed)) => {
                    let record = self.builder.build_reshare_collection(subdir, &parsed, Section::Manual);
                    self.records.push(record);
                },
                _ => self.unmatched += 1,
            }
        }
    }

    /// Scans `Profile/` — loose profile screenshot files, one record each.
    pub(super) fn scan_profile_shots(&mut self, profile_root: &Path) {
        for file in &fs::list_dir(profile_root).files {
            match parse_profile_file(&Self::name_of(file)) {
                Some(parsed) => {
                    let record = self.builder.build_profile_shot(file, &parsed, Section::Profile);
                    self.records.push(record);
                },
                None => self.unmatched += 1,
            }
        }
    }

    /// Scans `VE/` — loose video-evidence files, one record each.
    pub(super) fn scan_video_evidence(&mut self, ve_root: &Path) {
        for file in &fs::list_dir(ve_root).files {
            match parse_ve_file(&Self::name_of(file)) {
                Some(parsed) => {
                    let record = self.builder.build_video_evidence(file, &parsed, Section::VideoEvidence);
                    self.records.push(record);
                },
                None => self.unmatched += 1,
            }
        }
    }
}
