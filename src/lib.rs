//! magpie — intake classifier for social-content download trees.
//!
//! Takes a messy, multi-level directory tree produced by independent
//! content-download tools and turns it into a flat list of typed
//! [`ContentRecord`]s: one per logical piece of content, with the files that
//! belong to it, attributes inherited from its position in the tree, and a
//! computed destination path. The external mover and logger consume the list;
//! this crate never writes to the filesystem.
//!
//! ```no_run
//! use magpie::Scanner;
//!
//! let scanner = Scanner::new("/archive/root");
//! let records = scanner.scan("/downloads/SAT Daily on 2024-06-01")?;
//! for record in &records {
//!     println!("{} -> {}", record.shortcode, record.destination_path.display());
//! }
//! # Ok::<(), magpie::scan::error::Error>(())
//! ```

pub use magpie_model as model;
pub use magpie_patterns as patterns;
pub use magpie_scan as scan;

pub use magpie_model::{
    CategorySlot, ContentKind, ContentRecord, MediaType, MoSlot, SHEET_HEADERS, Section, SlotTables, SourceKind,
};
pub use magpie_scan::{Scanner, detect_source_kind};
