use std::fmt::{Display, Formatter, Result as FmtResult};

/// Coarse media classification derived from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Video,
    Image,
}
impl MediaType {
    /// Maps an extension (without the dot) to a media type.
    ///
    /// Only the extensions the naming conventions actually produce are
    /// recognized; anything else is `None` rather than a guess.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "mp4" => Some(Self::Video),
            "jpg" | "jpeg" | "png" => Some(Self::Image),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Video => "Video",
            MediaType::Image => "Image",
        }
    }
}
impl Display for MediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
