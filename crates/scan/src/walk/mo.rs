//! MO-classified sections: `Additional/MO/{type}/{category}` under the checks
//! layout, and `Categories/{category}` under the supplementary layout.
//!
//! Context here is structural, not positional: the type folder picks the MO
//! column, the category folder is the value, and both ride down to every
//! record found beneath as an override that beats any captured frame.

use std::path::Path;

use magpie_model::{MoSlot, Section};
use magpie_patterns::{NameKind, Recognition, parse_story_filename};

use super::ScanPass;
use super::stories::folder_contains_story_files;
use crate::context::ContextFrame;
use crate::fs;
use crate::groups::GroupAccumulator;

impl ScanPass<'_> {
    /// Scans `Additional/MO/{type}/{category}` under a checks layout.
    pub(super) fn scan_mo_additional(&mut self, mo_root: &Path) {
        let mut accumulator = GroupAccumulator::default();
        for type_dir in &fs::list_dir(mo_root).dirs {
            let type_name = Self::name_of(type_dir);
            let column = self.tables.mo_types.get(&type_name).copied();
            for category_dir in &fs::list_dir(type_dir).dirs {
                let value = Self::name_of(category_dir);
                let frame = match column {
                    Some(column) => ContextFrame::for_mo(column, value),
                    // Unknown type folder: still content, just no column to tag.
                    None => ContextFrame::default(),
                };
                self.scan_mo_category(category_dir, &frame, Section::MoAdditional, &mut accumulator);
            }
        }
        for group in accumulator.finalize() {
            let record = self.builder.build_story_group(group, Section::MoAdditional);
            self.records.push(record);
        }
    }

    /// Scans `Categories/{category}` under a supplementary layout; every
    /// category folder name lands in the MO-PW column.
    pub(super) fn scan_categories(&mut self, categories_root: &Path) {
        let mut accumulator = GroupAccumulator::default();
        for category_dir in &fs::list_dir(categories_root).dirs {
            let frame = ContextFrame::for_mo(MoSlot::Pw, Self::name_of(category_dir));
            self.scan_mo_category(category_dir, &frame, Section::Categories, &mut accumulator);
        }
        for group in accumulator.finalize() {
            let record = self.builder.build_story_group(group, Section::Categories);
            self.records.push(record);
        }
    }

    /// Scans one category directory for posts, story collections, profiles
    /// and loose story files. Unmatched children are not descended into —
    /// category directories are flat by convention.
    pub(super) fn scan_mo_category(
        &mut self,
        dir: &Path,
        frame: &ContextFrame,
        section: Section,
        accumulator: &mut GroupAccumulator,
    ) {
        let listing = fs::list_dir(dir);
        for subdir in &listing.dirs {
            let name = Self::name_of(subdir);
            match self.catalog.classify(&name, NameKind::Folder) {
                Some(Recognition::Post(parsed)) => {
                    let mut record = self.builder.build_post(subdir, &parsed, section);
                    frame.apply(&mut record);
                    self.records.push(record);
                },
                Some(Recognition::NamedStory(parsed)) => {
                    if folder_contains_story_files(subdir) {
                        self.stage_story_files(subdir, frame, accumulator);
                    } else {
                        let mut record = self.builder.build_named_story(subdir, &parsed, section);
                        frame.apply(&mut record);
                        self.records.push(record);
                    }
                },
                Some(Recognition::Profile(parsed)) => {
                    let mut record = self.builder.build_profile(subdir, &parsed, section);
                    frame.apply(&mut record);
                    self.records.push(record);
                },
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

    /// Stages every story file directly inside a wrapper folder, attaching
    /// the section's structural frame.
    pub(super) fn stage_story_files(
        &mut self,
        folder: &Path,
        frame: &ContextFrame,
        accumulator: &mut GroupAccumulator,
    ) {
        for file in &fs::list_dir(folder).files {
            match parse_story_filename(&Self::name_of(file)) {
                Some(parsed) => accumulator.stage(file, &parsed, frame.clone()),
                None => self.unmatched += 1,
            }
        }
    }
}
