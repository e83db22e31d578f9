//! The closed set of group tags.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Discriminant identifying which group/item variant a document encodes.
///
/// Canonical names are the variant names, matched case-sensitively.
///
/// ```
/// use assumption_core::Tag;
///
/// assert_eq!("B".parse::<Tag>().ok(), Some(Tag::B));
/// assert!("b".parse::<Tag>().is_err());
/// assert_eq!(Tag::A.to_string(), "A");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum Tag {
    A,
    B,
}

impl Tag {
    /// Canonical name written to the `type` key.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for tag in Tag::iter() {
            assert_eq!(tag.name().parse::<Tag>().ok(), Some(tag));
        }
    }

    #[test]
    fn test_unknown_and_lowercase_names_rejected() {
        for name in ["C", "a", "", " A", "AB"] {
            assert!(name.parse::<Tag>().is_err(), "{name:?} should not parse");
        }
    }

    #[test]
    fn test_serde_uses_canonical_name() -> Result<(), serde_yaml::Error> {
        assert_eq!(serde_yaml::to_string(&Tag::B)?, "B\n");
        assert_eq!(serde_yaml::from_str::<Tag>("A")?, Tag::A);
        Ok(())
    }
}
