//! The stories section: a free-form batch/category/code hierarchy where
//! content can appear at any depth.

use std::path::Path;

use magpie_model::Section;
use magpie_patterns::{NameKind, Recognition, parse_story_filename};

use super::ScanPass;
use crate::context::stories_context;
use crate::fs;
use crate::groups::GroupAccumulator;

impl ScanPass<'_> {
    pub(super) fn scan_stories(&mut self, stories_root: &Path) {
        let mut accumulator = GroupAccumulator::default();
        let mut parts = Vec::new();
        self.walk_stories(stories_root, &mut parts, &mut accumulator);
        for group in accumulator.finalize() {
            let record = self.builder.build_story_group(group, Section::Stories);
            self.records.push(record);
        }
    }

    /// Depth-first walk of one stories directory.
    ///
    /// `parts` is the chain of directory names between the section root and
    /// `dir`; it only ever grows on the way into an *unmatched* directory —
    /// a folder-shape match stops descent and claims the subtree.
    fn walk_stories(&mut self, dir: &Path, parts: &mut Vec<String>, accumulator: &mut GroupAccumulator) {
        let listing = fs::list_dir(dir);

        for subdir in &listing.dirs {
            let name = Self::name_of(subdir);
            match self.catalog.classify(&name, NameKind::Folder) {
                Some(Recognition::Post(parsed)) => {
                    let mut record = self.builder.build_post(subdir, &parsed, Section::Stories);
                    stories_context(parts, self.tables, self.catalog).apply(&mut record);
                    self.records.push(record);
                },
                Some(Recognition::Profile(parsed)) => {
                    let record = self.builder.build_profile(subdir, &parsed, Section::Stories);
                    self.records.push(record);
                },
                Some(Recognition::CommentThread(parsed)) => {
                    let record = self.builder.build_comment(subdir, &parsed, Section::Stories);
                    self.records.push(record);
                },
                Some(Recognition::NamedStory(parsed)) => {
                    // Ambiguous shape: a true collection folder, or just a
                    // wrapper around loose story files. Its direct children
                    // decide.
                    if folder_contains_story_files(subdir) {
                        parts.push(name);
                        self.collect_story_files(subdir, parts, accumulator);
                        parts.pop();
                    } else {
                        let mut record = self.builder.build_named_story(subdir, &parsed, Section::Stories);
                        stories_context(parts, self.tables, self.catalog).apply(&mut record);
                        self.records.push(record);
                    }
                },
                // Reshare folders carry no meaning inside the stories tree;
                // treat them like any other context directory.
                Some(_) | None => {
                    parts.push(name);
                    self.walk_stories(subdir, parts, accumulator);
                    parts.pop();
                },
            }
        }

        for file in &listing.files {
            match parse_story_filename(&Self::name_of(file)) {
                Some(parsed) => {
                    let frame = stories_context(parts, self.tables, self.catalog);
                    accumulator.stage(file, &parsed, frame);
                },
                None => self.unmatched += 1,
            }
        }
    }

    /// Stages every story file directly inside a wrapper folder.
    pub(super) fn collect_story_files(
        &mut self,
        folder: &Path,
        parts: &[String],
        accumulator: &mut GroupAccumulator,
    ) {
        for file in &fs::list_dir(folder).files {
            match parse_story_filename(&Self::name_of(file)) {
                Some(parsed) => {
                    let frame = stories_context(parts, self.tables, self.catalog);
                    accumulator.stage(file, &parsed, frame);
                },
                None => self.unmatched += 1,
            }
        }
    }
}

/// Whether a folder's direct children include story files.
pub(super) fn folder_contains_story_files(folder: &Path) -> bool {
    fs::list_dir(folder).files.iter().any(|f| parse_story_filename(&fs::name_of(f)).is_some())
}
