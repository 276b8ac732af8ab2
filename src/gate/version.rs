//! Client version parsing and comparison.
//!
//! # Responsibilities
//! - Parse dotted version strings into a major.minor.patch triple
//! - Compare two version strings positionally
//!
//! # Design Decisions
//! - Parsing is total: malformed or missing segments coerce to 0, so a
//!   broken client header can never take the gate down with it
//! - Shorter strings are zero-padded ("2.1" compares equal to "2.1.0")
//! - `Ordering` is the comparison result; derived `Ord` gives the
//!   positional triple comparison for free

use std::cmp::Ordering;
use std::fmt;

/// A client version parsed from a dotted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Parse a dotted version string.
    ///
    /// Never fails: missing or non-numeric segments default to 0, so
    /// "2.1" parses as 2.1.0 and "garbage" parses as 0.0.0. Segments
    /// beyond the third are ignored.
    pub fn parse(raw: &str) -> Self {
        let mut segments = raw
            .split('.')
            .map(|seg| seg.trim().parse::<u64>().unwrap_or(0));
        Self {
            major: segments.next().unwrap_or(0),
            minor: segments.next().unwrap_or(0),
            patch: segments.next().unwrap_or(0),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Compare two dotted version strings positionally.
pub fn compare(a: &str, b: &str) -> Ordering {
    Version::parse(a).cmp(&Version::parse(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_ordering() {
        assert_eq!(compare("2.1.1", "2.0.0"), Ordering::Greater);
        assert_eq!(compare("2.0.0", "2.1.1"), Ordering::Less);
        assert_eq!(compare("2.1.1", "2.1.1"), Ordering::Equal);
        assert_eq!(compare("10.0.0", "9.9.9"), Ordering::Greater);
    }

    #[test]
    fn test_shorter_string_zero_pads() {
        assert_eq!(compare("2.1", "2.1.0"), Ordering::Equal);
        assert_eq!(compare("2.1", "2.1.5"), Ordering::Less);
        assert_eq!(compare("2", "2.0.0"), Ordering::Equal);
    }

    #[test]
    fn test_compare_is_antisymmetric() {
        let samples = ["1", "1.2", "1.2.3", "0.0.1", "2.10", "3.0.0"];
        for a in samples {
            for b in samples {
                assert_eq!(compare(a, b), compare(b, a).reverse());
            }
            assert_eq!(compare(a, a), Ordering::Equal);
        }
    }

    #[test]
    fn test_malformed_segments_coerce_to_zero() {
        assert_eq!(Version::parse("garbage"), Version::parse("0.0.0"));
        assert_eq!(Version::parse("2.x.1"), Version::parse("2.0.1"));
        assert_eq!(Version::parse(""), Version::parse("0"));
        assert_eq!(compare("abc", "0.0.0"), Ordering::Equal);
    }
}
