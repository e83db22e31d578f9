//! Fluent builder for groups whose tag is only known at runtime.
//!
//! # Example
//!
//! ```rust
//! # fn main() -> Result<(), assumption_core::Error> {
//! use assumption_core::{GroupBuilder, ItemB, Tag};
//!
//! let group = GroupBuilder::new(Tag::B)
//!     .id("345")
//!     .item(ItemB::new("B", 93))
//!     .build()?;
//! assert_eq!(group.tag(), Tag::B);
//! # Ok(())
//! # }
//! ```

use super::group::Group;
use super::item::Item;
use super::tag::Tag;
use crate::{Error, Result};

/// Builder for [`Group`] starting from a tag.
#[derive(Debug, Clone)]
pub struct GroupBuilder {
    tag: Tag,
    id: Option<String>,
    item: Option<Item>,
}

impl GroupBuilder {
    #[must_use]
    pub const fn new(tag: Tag) -> Self {
        Self {
            tag,
            id: None,
            item: None,
        }
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn item(mut self, item: impl Into<Item>) -> Self {
        self.item = Some(item.into());
        self
    }

    /// Build the group.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Consistency`] if no item was set or the item does not
    /// belong to the tag.
    pub fn build(self) -> Result<Group> {
        let tag = self.tag;
        self.item
            .ok_or_else(|| Error::consistency(format!("Group{tag}"), "missing required item"))
            .and_then(|item| Group::from_parts(tag, self.id, item))
    }
}
