//! Group variants: tagged containers holding an optional id and one item.
//!
//! The tag of a group is a function of its variant, so a `GroupA` can never
//! carry tag `B` or hold an `ItemB`. The only place a tag and an item meet at
//! runtime is [`Group::from_parts`], which checks the pairing.

use strum::{Display, IntoStaticStr};

use super::item::{Item, ItemA, ItemB};
use super::tag::Tag;
use crate::{Error, Result};

/// Group tagged `A`, holding an [`ItemA`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GroupA {
    pub id: Option<String>,
    pub item: ItemA,
}

impl GroupA {
    pub const TAG: Tag = Tag::A;

    #[must_use]
    pub const fn new(id: Option<String>, item: ItemA) -> Self {
        Self { id, item }
    }
}

/// Group tagged `B`, holding an [`ItemB`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GroupB {
    pub id: Option<String>,
    pub item: ItemB,
}

impl GroupB {
    pub const TAG: Tag = Tag::B;

    #[must_use]
    pub const fn new(id: Option<String>, item: ItemB) -> Self {
        Self { id, item }
    }
}

/// Which group variant a shape selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum GroupKind {
    GroupA,
    GroupB,
}

/// Any group variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Group {
    A(GroupA),
    B(GroupB),
}

impl Group {
    /// Build a group from a tag and an item, checking that they belong together.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Consistency`] when the item variant is not the one the
    /// tag's group variant holds.
    pub fn from_parts(tag: Tag, id: Option<String>, item: Item) -> Result<Self> {
        match (tag, item) {
            (Tag::A, Item::A(item)) => Ok(Self::A(GroupA::new(id, item))),
            (Tag::B, Item::B(item)) => Ok(Self::B(GroupB::new(id, item))),
            (tag, item) => Err(Error::consistency(
                Self::kind_for(tag).to_string(),
                format!("tag {tag} cannot hold an {}", item.kind()),
            )),
        }
    }

    /// Split a group into its id and item.
    #[must_use]
    pub fn into_parts(self) -> (Option<String>, Item) {
        match self {
            Self::A(group) => (group.id, Item::A(group.item)),
            Self::B(group) => (group.id, Item::B(group.item)),
        }
    }

    #[must_use]
    pub const fn tag(&self) -> Tag {
        match self {
            Self::A(_) => GroupA::TAG,
            Self::B(_) => GroupB::TAG,
        }
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::A(group) => group.id.as_deref(),
            Self::B(group) => group.id.as_deref(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> GroupKind {
        match self {
            Self::A(_) => GroupKind::GroupA,
            Self::B(_) => GroupKind::GroupB,
        }
    }

    #[must_use]
    pub fn item_name(&self) -> &str {
        match self {
            Self::A(group) => &group.item.name,
            Self::B(group) => &group.item.name,
        }
    }

    const fn kind_for(tag: Tag) -> GroupKind {
        match tag {
            Tag::A => GroupKind::GroupA,
            Tag::B => GroupKind::GroupB,
        }
    }
}

impl From<GroupA> for Group {
    fn from(group: GroupA) -> Self {
        Self::A(group)
    }
}

impl From<GroupB> for Group {
    fn from(group: GroupB) -> Self {
        Self::B(group)
    }
}
