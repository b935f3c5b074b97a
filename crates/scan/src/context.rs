//! Contextual attributes inherited from directory position.
//!
//! A [`ContextFrame`] is a small immutable value: each branch of the walk gets
//! its own copy, so no sibling can see another's contributions. Frames are
//! derived from the sequence of directory names between a section root and
//! the content, never mutated in place.

use magpie_model::{CategorySlot, ContentRecord, MoSlot, SlotTables};
use magpie_patterns::{PatternCatalog, parse_site_code};

/// Identity of the account that reshared a piece of content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resharer {
    pub username: String,
    pub full_name: String,
}

/// Attributes a record inherits from where it sat in the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextFrame {
    /// Coarse grouping label, position 0 of the stories tree.
    pub batch: String,
    /// Category dropdown column, mapped from position 1.
    pub category_column: Option<CategorySlot>,
    /// Category dropdown value, from position 2 and deeper refinements.
    pub category_value: String,
    /// Site code, when position 2 was a labeled-code folder.
    pub site_code: String,
    /// MO dropdown column and value, when inside an MO section.
    pub mo: Option<(MoSlot, String)>,
    /// Resharer identity, when inside a reshare folder.
    pub resharer: Option<Resharer>,
}

impl ContextFrame {
    /// A frame carrying only an MO column and value.
    pub fn for_mo(column: MoSlot, value: impl Into<String>) -> Self {
        Self { mo: Some((column, value.into())), ..Self::default() }
    }

    /// Returns this frame with the resharer identity set.
    pub fn with_resharer(mut self, resharer: Resharer) -> Self {
        self.resharer = Some(resharer);
        self
    }

    /// Copies every populated attribute onto the record.
    pub fn apply(&self, record: &mut ContentRecord) {
        record.batch = self.batch.clone();
        record.wpas_code = self.site_code.clone();
        if let Some(column) = self.category_column
            && !self.category_value.is_empty()
        {
            record.set_category(column, self.category_value.clone());
        }
        if let Some((column, value)) = &self.mo
            && !value.is_empty()
        {
            record.set_mo(*column, value.clone());
        }
        if let Some(resharer) = &self.resharer {
            record.resharer_username = resharer.username.clone();
            record.resharer_name = resharer.full_name.clone();
        }
    }
}

/// Derives a [`ContextFrame`] from the directory names between the stories
/// section root and the content.
///
/// Positional rule: position 0 is the batch label; position 1 maps through
/// the category table to a dropdown column; position 2 either matches the
/// labeled-code shape (code becomes both the dropdown value and the site
/// code) or becomes the dropdown value verbatim. Deeper names refine the
/// value by `"{value} / {name}"` — unless a name is content-shaped, which
/// stops propagation: that folder is content, not context.
pub fn stories_context(parts: &[String], tables: &SlotTables, catalog: &PatternCatalog) -> ContextFrame {
    let mut frame = ContextFrame::default();
    let Some(batch) = parts.first() else {
        return frame;
    };
    frame.batch = batch.clone();
    if let Some(category) = parts.get(1) {
        frame.category_column = tables.categories.get(category).copied();
    }
    if let Some(labeled) = parts.get(2) {
        match parse_site_code(labeled) {
            Some(code) => {
                frame.site_code = code.to_string();
                frame.category_value = code.to_string();
            },
            None => frame.category_value = labeled.clone(),
        }
        for deeper in &parts[3..] {
            if catalog.is_content_name(deeper) {
                break;
            }
            frame.category_value = format!("{} / {}", frame.category_value, deeper);
        }
    }
    frame
}
