//! Deterministic fallback identifiers for content without a native shortcode.

/// Generates a pseudo-shortcode for a record with no native content code.
///
/// Format: `NOID_{handle}_{date}_{hash8}`, where `hash8` is the first eight
/// hex characters of the BLAKE3 hash of the matched folder or file name.
/// Reproducible bit-for-bit for the same inputs — rescanning an unmodified
/// tree yields the same identifiers.
pub fn pseudo_shortcode(handle: &str, date: &str, name: &str) -> String {
    let hash = blake3::hash(name.as_bytes()).to_hex();
    format!("NOID_{handle}_{date}_{}", &hash.as_str()[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pseudo_shortcode_is_deterministic() {
        let a = pseudo_shortcode("jane", "2024-01-01", "IG Profile - 2024-01-01 - Jane - @jane");
        let b = pseudo_shortcode("jane", "2024-01-01", "IG Profile - 2024-01-01 - Jane - @jane");
        assert_eq!(a, b);
        assert!(a.starts_with("NOID_jane_2024-01-01_"));
        assert_eq!(a.len(), "NOID_jane_2024-01-01_".len() + 8);
    }

    #[test]
    fn test_distinct_names_yield_distinct_identifiers() {
        let a = pseudo_shortcode("jane", "2024-01-01", "folder one");
        let b = pseudo_shortcode("jane", "2024-01-01", "folder two");
        assert_ne!(a, b);
    }
}
