//! Tree walking and record assembly for magpie.
//!
//! One [`Scanner::scan`] call is one synchronous, single-threaded,
//! depth-first pass over a source root: classify names through the pattern
//! catalog, inherit context from directory position, accumulate scattered
//! story files into groups, and return the finalized records in traversal
//! order. The walk is read-only; recoverable problems (unreadable subtrees,
//! malformed companion documents, unrecognized names) degrade to skips, never
//! errors.

mod builder;
mod context;
pub mod error;
mod fs;
mod groups;
mod walk;

pub use self::context::{ContextFrame, Resharer, stories_context};
pub use self::groups::{GroupAccumulator, StoryGroup};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use exn::OptionExt;
use magpie_model::{ContentRecord, SlotTables, SourceKind};
use magpie_patterns::{PatternCatalog, parse_checks_dir};
use time::OffsetDateTime;
use tracing::instrument;

use crate::builder::ItemBuilder;
use crate::error::{ErrorKind, Result};
use crate::walk::ScanPass;

/// Name prefix identifying a checks-layout root.
pub const SAT_DAILY_PREFIX: &str = "SAT Daily on ";
/// Name prefix identifying a supplementary-layout root.
pub const DAILY_MO_PREFIX: &str = "Daily MO on ";

/// Detects which source layout a root directory follows, from its name alone.
pub fn detect_source_kind(source_dir: &Path) -> Option<SourceKind> {
    let name = fs::name_of(source_dir);
    if name.starts_with(SAT_DAILY_PREFIX) {
        Some(SourceKind::SatDaily)
    } else if name.starts_with(DAILY_MO_PREFIX) {
        Some(SourceKind::DailyMo)
    } else {
        None
    }
}

/// Scans source roots into ordered lists of [`ContentRecord`]s.
///
/// Construction fixes the archive root every destination path is computed
/// under; the slot tables default to the canonical ones and can be replaced
/// via [`with_tables`](Self::with_tables).
pub struct Scanner {
    archive_root: PathBuf,
    tables: SlotTables,
    catalog: PatternCatalog,
}

impl Scanner {
    pub fn new(archive_root: impl Into<PathBuf>) -> Self {
        Self { archive_root: archive_root.into(), tables: SlotTables::default(), catalog: PatternCatalog::default() }
    }

    /// Replaces the folder-name → slot lookup tables.
    pub fn with_tables(mut self, tables: SlotTables) -> Self {
        self.tables = tables;
        self
    }

    /// Scans one source root and returns every discovered record, in
    /// traversal order.
    ///
    /// # Errors
    /// [`ErrorKind::UnrecognizedLayout`] when the root's name matches neither
    /// layout prefix; [`ErrorKind::MissingChecksRoot`] when a checks-layout
    /// root has no checks subdirectory. Everything below the root degrades to
    /// "skip and continue" instead of erroring.
    #[instrument(skip_all, fields(source = %source_dir.as_ref().display()))]
    pub fn scan(&self, source_dir: impl AsRef<Path>) -> Result<Vec<ContentRecord>> {
        let source_dir = source_dir.as_ref();
        let kind = detect_source_kind(source_dir)
            .ok_or_raise(|| ErrorKind::UnrecognizedLayout(source_dir.to_path_buf()))?;
        let timestamp = scan_date_stamp();
        match kind {
            SourceKind::SatDaily => {
                let (checks_root, downloader) = find_checks_root(source_dir)
                    .ok_or_raise(|| ErrorKind::MissingChecksRoot(source_dir.to_path_buf()))?;
                Ok(self.run(&timestamp, &downloader, kind, |pass| pass.scan_checks_layout(&checks_root)))
            },
            SourceKind::DailyMo => Ok(self.run(&timestamp, "", kind, |pass| pass.scan_supplementary_layout(source_dir))),
        }
    }

    fn run<'s>(
        &'s self,
        timestamp: &'s str,
        downloader: &'s str,
        kind: SourceKind,
        drive: impl FnOnce(&mut ScanPass<'s>),
    ) -> Vec<ContentRecord> {
        let builder = ItemBuilder::new(&self.archive_root, timestamp, downloader, kind);
        let mut pass = ScanPass::new(&self.catalog, &self.tables, builder);
        drive(&mut pass);
        let mut by_kind: BTreeMap<&'static str, usize> = BTreeMap::new();
        for record in &pass.records {
            *by_kind.entry(record.kind.as_str()).or_default() += 1;
        }
        tracing::info!(
            records = pass.records.len(),
            unclassified = pass.unmatched,
            summary = ?by_kind,
            "scan pass complete"
        );
        pass.records
    }
}

/// Finds the checks subdirectory of a checks-layout root and the archiver
/// initials its name carries.
fn find_checks_root(source_dir: &Path) -> Option<(PathBuf, String)> {
    fs::list_dir(source_dir).dirs.into_iter().find_map(|dir| {
        let name = fs::name_of(&dir);
        let initials = parse_checks_dir(&name)?.to_string();
        Some((dir, initials))
    })
}

/// Today's date as the `YYYY-MM-DD` archive stamp. The only wall-clock input
/// to a scan; record identity never depends on it.
fn scan_date_stamp() -> String {
    let date = OffsetDateTime::now_utc().date();
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}
