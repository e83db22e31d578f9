//! Tag registry: the closed mapping from tag to group and item shape.
//!
//! The table is the single place that says which group variant a tag
//! selects and which item variant that group must hold. Both the encoder and
//! the decoder consult it, so a tag without an entry can be neither written
//! nor read.

use crate::model::{GroupKind, ItemKind, Tag, ValueKind};
use crate::{Error, Result};

/// Registered shape for one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub tag: Tag,
    pub group: GroupKind,
    pub item: ItemKind,
}

impl Shape {
    /// Primitive kind expected at `item.value`.
    #[must_use]
    pub const fn value_kind(&self) -> ValueKind {
        self.item.value_kind()
    }
}

const SHAPES: [Shape; 2] = [
    Shape {
        tag: Tag::A,
        group: GroupKind::GroupA,
        item: ItemKind::ItemA,
    },
    Shape {
        tag: Tag::B,
        group: GroupKind::GroupB,
        item: ItemKind::ItemB,
    },
];

/// All registered shapes, in tag order.
pub fn shapes() -> impl Iterator<Item = &'static Shape> {
    SHAPES.iter()
}

/// Look up the shape for a tag, if registered.
#[must_use]
pub fn lookup(tag: Tag) -> Option<&'static Shape> {
    SHAPES.iter().find(|shape| shape.tag == tag)
}

/// Resolve a tag to its shape.
///
/// # Errors
///
/// Returns [`Error::UnknownTag`] if the tag has no entry.
pub fn resolve(tag: Tag) -> Result<&'static Shape> {
    lookup(tag).ok_or_else(|| Error::UnknownTag {
        tag: tag.to_string(),
    })
}

/// Resolve a canonical tag name to its shape.
///
/// # Errors
///
/// Returns [`Error::UnknownTag`] if `name` is not a canonical tag name.
pub fn resolve_name(name: &str) -> Result<&'static Shape> {
    name.parse::<Tag>()
        .map_err(|_| Error::UnknownTag {
            tag: name.to_string(),
        })
        .and_then(resolve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_tag_has_exactly_one_shape() {
        for tag in Tag::iter() {
            let count = shapes().filter(|shape| shape.tag == tag).count();
            assert_eq!(count, 1, "tag {tag} must be registered once");
        }
    }

    #[test]
    fn test_resolve_pairs_group_and_item() -> Result<()> {
        let a = resolve(Tag::A)?;
        assert_eq!((a.group, a.item), (GroupKind::GroupA, ItemKind::ItemA));
        assert_eq!(a.value_kind(), ValueKind::Text);

        let b = resolve(Tag::B)?;
        assert_eq!((b.group, b.item), (GroupKind::GroupB, ItemKind::ItemB));
        assert_eq!(b.value_kind(), ValueKind::Integer);
        Ok(())
    }

    #[test]
    fn test_resolve_name_rejects_unknown() {
        let err = resolve_name("C").err();
        assert_eq!(err.as_ref().map(Error::kind), Some(ErrorKind::UnknownTag));
        assert_eq!(
            err,
            Some(Error::UnknownTag {
                tag: "C".to_string()
            })
        );
    }

    #[test]
    fn test_resolve_name_is_case_sensitive() {
        assert!(resolve_name("B").is_ok());
        assert!(resolve_name("b").is_err());
    }
}
