//! Item variants: named scalar payloads held by a group.

use strum::{Display, IntoStaticStr};

/// Item whose value is text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ItemA {
    pub name: String,
    pub value: String,
}

impl ItemA {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Item whose value is an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ItemB {
    pub name: String,
    pub value: i64,
}

impl ItemB {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Primitive kind of an item's `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ValueKind {
    Text,
    Integer,
}

/// Which item variant a shape expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum ItemKind {
    ItemA,
    ItemB,
}

impl ItemKind {
    #[must_use]
    pub const fn value_kind(self) -> ValueKind {
        match self {
            Self::ItemA => ValueKind::Text,
            Self::ItemB => ValueKind::Integer,
        }
    }
}

/// Any item variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Item {
    A(ItemA),
    B(ItemB),
}

impl Item {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::A(item) => &item.name,
            Self::B(item) => &item.name,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ItemKind {
        match self {
            Self::A(_) => ItemKind::ItemA,
            Self::B(_) => ItemKind::ItemB,
        }
    }
}

impl From<ItemA> for Item {
    fn from(item: ItemA) -> Self {
        Self::A(item)
    }
}

impl From<ItemB> for Item {
    fn from(item: ItemB) -> Self {
        Self::B(item)
    }
}
