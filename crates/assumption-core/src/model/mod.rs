//! Data model: tags, items and groups.
//!
//! # Module Structure
//!
//! - `tag`: the closed tag enumeration
//! - `item`: `ItemA` / `ItemB` payloads
//! - `group`: `GroupA` / `GroupB` containers and the `Group` sum type
//! - `builder`: runtime-tagged construction

mod builder;
mod group;
mod item;
mod tag;

pub use builder::GroupBuilder;
pub use group::{Group, GroupA, GroupB, GroupKind};
pub use item::{Item, ItemA, ItemB, ItemKind, ValueKind};
pub use tag::Tag;
