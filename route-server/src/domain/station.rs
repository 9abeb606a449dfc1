//! Station identifier type.

use std::borrow::Borrow;
use std::fmt;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// An opaque station identifier, e.g. "Delhi".
///
/// Equality is exact: no case folding or whitespace trimming happens here.
/// Name correction belongs to whoever builds the identifier.
///
/// # Examples
///
/// ```
/// use route_server::domain::StationId;
///
/// let delhi = StationId::parse("Delhi").unwrap();
/// assert_eq!(delhi.as_str(), "Delhi");
///
/// // Different case is a different station
/// assert_ne!(delhi, StationId::parse("delhi").unwrap());
///
/// // Blank names are rejected
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(String);

impl StationId {
    /// Parse a station identifier.
    ///
    /// The input must contain at least one non-whitespace character.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.trim().is_empty() {
            return Err(InvalidStationId {
                reason: "must not be blank",
            });
        }
        Ok(StationId(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Za-z][A-Za-z ]{0,20}") {
            let id = StationId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Whitespace-only strings are always rejected
        #[test]
        fn whitespace_rejected(s in "[ \t\n]{0,8}") {
            prop_assert!(StationId::parse(&s).is_err());
        }
    }
}
