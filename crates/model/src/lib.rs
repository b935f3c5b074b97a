//! Data model for magpie scan output.
//!
//! One [`ContentRecord`] per logical piece of content, exposing the fixed
//! 37-column row schema the external logger consumes and the scan-internal
//! fields the external mover consumes.

pub mod error;
mod kind;
mod media;
mod record;
mod section;
mod slots;

pub use self::kind::ContentKind;
pub use self::media::MediaType;
pub use self::record::{ContentRecord, SHEET_HEADERS, TAB_PV_MANUAL, TAB_STORIES};
pub use self::section::{Section, SourceKind};
pub use self::slots::{CategorySlot, MoSlot, SlotTables};

fn sanitize(s: impl AsRef<str>) -> String {
    s.as_ref().trim().to_lowercase().replace('/', "").replace('-', "").replace('_', "").replace(' ', "")
}
