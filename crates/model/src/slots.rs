//! Dropdown slot identifiers and the folder-name lookup tables that route
//! directory context into them.
//!
//! The slot *sets* are closed (they are spreadsheet columns), but which folder
//! name maps to which slot is data: front ends may deserialize replacement
//! tables, e.g. when a category folder is renamed mid-season.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Content-category dropdown columns (row columns Q–AE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum CategorySlot {
    Books,
    Conditions,
    EmotionalSupport,
    Fear,
    Food,
    HealingStories,
    HealingTools,
    HealingToolsMore,
    History,
    Miscellaneous,
    MmScience,
    Other,
    PwTrends,
    Resources,
    Supporting,
}
impl CategorySlot {
    /// Every slot, in column order.
    pub const ALL: [CategorySlot; 15] = [
        CategorySlot::Books,
        CategorySlot::Conditions,
        CategorySlot::EmotionalSupport,
        CategorySlot::Fear,
        CategorySlot::Food,
        CategorySlot::HealingStories,
        CategorySlot::HealingTools,
        CategorySlot::HealingToolsMore,
        CategorySlot::History,
        CategorySlot::Miscellaneous,
        CategorySlot::MmScience,
        CategorySlot::Other,
        CategorySlot::PwTrends,
        CategorySlot::Resources,
        CategorySlot::Supporting,
    ];

    /// Returns the column header for this slot.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategorySlot::Books => "Books",
            CategorySlot::Conditions => "Conditions",
            CategorySlot::EmotionalSupport => "Emotional Support",
            CategorySlot::Fear => "Fear",
            CategorySlot::Food => "Food",
            CategorySlot::HealingStories => "Healing Stories",
            CategorySlot::HealingTools => "Healing Tools",
            CategorySlot::HealingToolsMore => "Healing Tools More",
            CategorySlot::History => "History",
            CategorySlot::Miscellaneous => "Miscellaneous",
            CategorySlot::MmScience => "MM Science",
            CategorySlot::Other => "Other",
            CategorySlot::PwTrends => "PW Trends",
            CategorySlot::Resources => "Resources",
            CategorySlot::Supporting => "Supporting",
        }
    }
}

/// MO classification dropdown columns (row columns AF–AK).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum MoSlot {
    Publication,
    Pw,
    Rpt,
    Si,
    Ts,
    Wts,
}
impl MoSlot {
    /// Every slot, in column order.
    pub const ALL: [MoSlot; 6] =
        [MoSlot::Publication, MoSlot::Pw, MoSlot::Rpt, MoSlot::Si, MoSlot::Ts, MoSlot::Wts];

    /// Returns the column header for this slot.
    pub fn as_str(&self) -> &'static str {
        match self {
            MoSlot::Publication => "MO-Publication",
            MoSlot::Pw => "MO-PW",
            MoSlot::Rpt => "MO-RPT",
            MoSlot::Si => "MO-SI",
            MoSlot::Ts => "MO-TS",
            MoSlot::Wts => "MO-WTS",
        }
    }
}

/// Folder-name → slot lookup tables, one per section convention.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SlotTables {
    /// Category folder names in the stories tree → category column.
    pub categories: BTreeMap<String, CategorySlot>,
    /// MO type folder names → MO column.
    pub mo_types: BTreeMap<String, MoSlot>,
}
impl Default for SlotTables {
    fn default() -> Self {
        let categories = [
            ("Books", CategorySlot::Books),
            ("Conditions", CategorySlot::Conditions),
            ("Emotional Support", CategorySlot::EmotionalSupport),
            ("Fear", CategorySlot::Fear),
            ("Food", CategorySlot::Food),
            ("Healing Stories", CategorySlot::HealingStories),
            ("Healing Tools", CategorySlot::HealingTools),
            ("Healing Tools More", CategorySlot::HealingToolsMore),
            ("History", CategorySlot::History),
            ("Miscellaneous", CategorySlot::Miscellaneous),
            ("MM Science", CategorySlot::MmScience),
            ("Other", CategorySlot::Other),
            ("PW Trends", CategorySlot::PwTrends),
            ("Resources", CategorySlot::Resources),
            ("Supporting", CategorySlot::Supporting),
        ]
        .into_iter()
        .map(|(name, slot)| (name.to_string(), slot))
        .collect();
        let mo_types = [
            ("PW", MoSlot::Pw),
            ("RPT", MoSlot::Rpt),
            ("SI", MoSlot::Si),
            ("TS", MoSlot::Ts),
            ("WTS", MoSlot::Wts),
        ]
        .into_iter()
        .map(|(name, slot)| (name.to_string(), slot))
        .collect();
        Self { categories, mo_types }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_cover_known_folders() {
        let tables = SlotTables::default();
        assert_eq!(tables.categories.get("Books"), Some(&CategorySlot::Books));
        assert_eq!(tables.categories.get("MM Science"), Some(&CategorySlot::MmScience));
        assert_eq!(tables.mo_types.get("WTS"), Some(&MoSlot::Wts));
        assert_eq!(tables.categories.len(), 15);
        assert_eq!(tables.mo_types.len(), 5);
    }

    #[test]
    fn test_slot_order_matches_column_order() {
        // BTreeMap iteration over slots must follow the Q-AE column layout.
        let mut last = None;
        for slot in CategorySlot::ALL {
            if let Some(prev) = last {
                assert!(prev < slot);
            }
            last = Some(slot);
        }
    }
}
