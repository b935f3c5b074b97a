use std::fmt::{Display, Formatter, Result as FmtResult};

/// The two recognized top-level source layouts.
///
/// Which one a root directory follows is decided by a name-prefix test before
/// the walk starts; everything below the root dispatches on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// `SAT Daily on YYYY-MM-DD` roots: checks tree with Stories, P&V and
    /// Additional/MO sections under a `SAT Checks - {initials} - RTA` child.
    SatDaily,
    /// `Daily MO on YYYY-MM-DD` roots: Categories, Reshares, Manual, Profile
    /// and VE sections directly under the root.
    DailyMo,
}
impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::SatDaily => "sat_daily",
            SourceKind::DailyMo => "daily_mo",
        }
    }
}
impl Display for SourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// The top-level section a record was discovered under.
///
/// Section identity drives the target tab split and is carried on every
/// record so the logger can group rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Stories,
    PostsVideos,
    MoAdditional,
    Categories,
    Reshares,
    Manual,
    Profile,
    VideoEvidence,
}
impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Stories => "stories",
            Section::PostsVideos => "pv",
            Section::MoAdditional => "mo",
            Section::Categories => "categories",
            Section::Reshares => "reshares",
            Section::Manual => "manual",
            Section::Profile => "profile",
            Section::VideoEvidence => "ve",
        }
    }
}
impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
