//! Accumulation of scattered story files into single records.
//!
//! Story content arrives as a triple of files (raw, screen capture,
//! screenshot) that may be spread across sibling folders; membership is only
//! discoverable by scanning whole directories. Files are staged under their
//! shortcode and merged into one group per shortcode when the section's walk
//! completes.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use magpie_model::MediaType;
use magpie_patterns::StoryFile;

use crate::context::ContextFrame;

/// One story's accumulated state during a section walk. Mutable while the
/// section is being walked, frozen into a record at finalization.
#[derive(Debug, Clone)]
pub struct StoryGroup {
    pub shortcode: String,
    /// Fixed by the first file staged.
    pub username: String,
    /// Filled by the first file that carries one; never overwritten by an
    /// empty or later value.
    pub full_name: String,
    /// Eight-digit date as written in the file name; fixed by the first file.
    pub date: String,
    /// Decided solely by the canonical raw-role file's extension.
    pub media_type: Option<MediaType>,
    /// Every staged file, in staging order.
    pub files: Vec<PathBuf>,
    /// Parent directory of the most recently staged file.
    pub parent_dir: Option<PathBuf>,
    /// Context captured at first staging; MO and resharer overrides win.
    pub frame: ContextFrame,
}
impl StoryGroup {
    fn new(parsed: &StoryFile, frame: ContextFrame) -> Self {
        Self {
            shortcode: parsed.shortcode.clone(),
            username: parsed.username.clone(),
            full_name: String::new(),
            date: parsed.date.clone(),
            media_type: None,
            files: Vec::new(),
            parent_dir: None,
            frame,
        }
    }
}

/// Collects story files by shortcode and merges them into groups.
///
/// One accumulator lives per top-level section; the walking thread is the
/// only mutator. Keying is by shortcode alone, so files from different
/// directories with the same shortcode still merge into a single record.
#[derive(Default)]
pub struct GroupAccumulator {
    groups: BTreeMap<String, StoryGroup>,
}

impl GroupAccumulator {
    /// Stages one story file into its shortcode group.
    ///
    /// The first staging fixes the group's handle, date and context frame.
    /// Later stagings may fill an empty display name, extend the file set,
    /// and override the frame's MO and resharer slots — overrides always win
    /// over the captured frame.
    pub fn stage(&mut self, file: &Path, parsed: &StoryFile, frame: ContextFrame) {
        let group = self
            .groups
            .entry(parsed.shortcode.clone())
            .or_insert_with(|| StoryGroup::new(parsed, frame.clone()));
        group.files.push(file.to_path_buf());
        group.parent_dir = file.parent().map(Path::to_path_buf);
        if group.full_name.is_empty() && !parsed.full_name.is_empty() {
            group.full_name = parsed.full_name.clone();
        }
        if let Some(media_type) = parsed.media_type() {
            group.media_type = Some(media_type);
        }
        if frame.mo.is_some() {
            group.frame.mo = frame.mo;
        }
        if frame.resharer.is_some() {
            group.frame.resharer = frame.resharer;
        }
    }

    /// Whether anything was staged.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Freezes the accumulated groups, in shortcode order.
    pub fn finalize(self) -> impl Iterator<Item = StoryGroup> {
        self.groups.into_values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use magpie_model::MoSlot;
    use magpie_patterns::parse_story_filename;

    fn story(name: &str) -> StoryFile {
        parse_story_filename(name).expect("test name should parse")
    }

    fn stage_triple(acc: &mut GroupAccumulator, frame: &ContextFrame) {
        for name in [
            "alice_story_20240101_120000_01_abc123_raw.mp4",
            "alice_story_20240101_120000_01_abc123_screencapture.mp4",
            "alice_story_20240101_120000_01_abc123_screenshot.png",
        ] {
            acc.stage(Path::new(name), &story(name), frame.clone());
        }
    }

    #[test]
    fn test_triple_merges_into_one_group() {
        let mut acc = GroupAccumulator::default();
        stage_triple(&mut acc, &ContextFrame::default());
        let groups: Vec<StoryGroup> = acc.finalize().collect();
        assert_eq!(groups.len(), 1);
        let group = &groups[0];
        assert_eq!(group.shortcode, "abc123");
        assert_eq!(group.username, "alice");
        assert_eq!(group.files.len(), 3);
        assert_eq!(group.media_type, Some(MediaType::Video));
    }

    #[test]
    fn test_media_type_ignores_non_canonical_roles() {
        let mut acc = GroupAccumulator::default();
        // Only capture and screenshot staged: no raw file, no media type.
        for name in [
            "alice_story_20240101_120000_01_abc123_screencapture.mp4",
            "alice_story_20240101_120000_01_abc123_screenshot.png",
        ] {
            acc.stage(Path::new(name), &story(name), ContextFrame::default());
        }
        let group = acc.finalize().next().expect("one group");
        assert_eq!(group.media_type, None);
    }

    #[test]
    fn test_display_name_fills_empty_but_never_overwrites() {
        let mut acc = GroupAccumulator::default();
        acc.stage(
            Path::new("a"),
            &story("alice_story_20240101_120000_01_abc123_raw.mp4"),
            ContextFrame::default(),
        );
        acc.stage(
            Path::new("b"),
            &story("Alice Wonder alice_story_20240101_120000_02_abc123_screenshot.png"),
            ContextFrame::default(),
        );
        acc.stage(
            Path::new("c"),
            &story("Someone Else alice_story_20240101_120000_03_abc123_screencapture.mp4"),
            ContextFrame::default(),
        );
        let group = acc.finalize().next().expect("one group");
        assert_eq!(group.full_name, "Alice Wonder");
    }

    #[test]
    fn test_first_staging_fixes_handle_and_date() {
        let mut acc = GroupAccumulator::default();
        acc.stage(
            Path::new("a"),
            &story("alice_story_20240101_120000_01_abc123_raw.mp4"),
            ContextFrame::default(),
        );
        // Same shortcode under a different prefix and date: fixed fields win.
        acc.stage(
            Path::new("b"),
            &story("bob_story_20240202_130000_01_abc123_screenshot.png"),
            ContextFrame::default(),
        );
        let group = acc.finalize().next().expect("one group");
        assert_eq!(group.username, "alice");
        assert_eq!(group.date, "20240101");
    }

    #[test]
    fn test_context_captured_at_first_staging() {
        let mut acc = GroupAccumulator::default();
        let mut first = ContextFrame::default();
        first.batch = "Batch 1".to_string();
        let mut second = ContextFrame::default();
        second.batch = "Batch 2".to_string();
        acc.stage(Path::new("a"), &story("alice_story_20240101_120000_01_abc123_raw.mp4"), first);
        acc.stage(Path::new("b"), &story("alice_story_20240101_120000_02_abc123_screenshot.png"), second);
        let group = acc.finalize().next().expect("one group");
        assert_eq!(group.frame.batch, "Batch 1");
    }

    #[test]
    fn test_late_overrides_replace_captured_slots() {
        let mut acc = GroupAccumulator::default();
        acc.stage(
            Path::new("a"),
            &story("alice_story_20240101_120000_01_abc123_raw.mp4"),
            ContextFrame::for_mo(MoSlot::Pw, "History - Lifestyle"),
        );
        acc.stage(
            Path::new("b"),
            &story("alice_story_20240101_120000_02_abc123_screenshot.png"),
            ContextFrame::for_mo(MoSlot::Pw, "History - Character"),
        );
        let group = acc.finalize().next().expect("one group");
        assert_eq!(group.frame.mo, Some((MoSlot::Pw, "History - Character".to_string())));
    }

    #[test]
    fn test_groups_finalize_in_shortcode_order() {
        let mut acc = GroupAccumulator::default();
        for name in [
            "alice_story_20240101_120000_01_zzz_raw.mp4",
            "alice_story_20240101_120000_01_aaa_raw.mp4",
        ] {
            acc.stage(Path::new(name), &story(name), ContextFrame::default());
        }
        let shortcodes: Vec<String> = acc.finalize().map(|g| g.shortcode).collect();
        assert_eq!(shortcodes, vec!["aaa".to_string(), "zzz".to_string()]);
    }
}
