//! Encoder: group → YAML document.
//!
//! Output layout is fixed so documents compare byte-for-byte:
//!
//! ```text
//! id: '345'
//! item: {name: B, value: 93}
//! type: B
//! ```
//!
//! Keys are alphabetical (`id`, `item`, `type`); `id` is omitted when absent;
//! the item is a single-line flow mapping in declaration order.

use super::scalar::{write_integer, write_text};
use crate::model::{Group, ItemKind};
use crate::registry;
use crate::{Error, Result};

/// Serialize a group into its document text.
///
/// # Errors
///
/// - [`Error::UnsupportedTag`] if the registry has no shape for the tag
/// - [`Error::Consistency`] if the group's item is not the registered variant
pub fn encode(group: &Group) -> Result<String> {
    let tag = group.tag();
    let shape = registry::lookup(tag).ok_or_else(|| Error::UnsupportedTag {
        tag: tag.to_string(),
    })?;

    let (item_kind, id) = match group {
        Group::A(g) => (ItemKind::ItemA, g.id.as_deref()),
        Group::B(g) => (ItemKind::ItemB, g.id.as_deref()),
    };
    if item_kind != shape.item || group.kind() != shape.group {
        return Err(Error::consistency(
            group.kind().to_string(),
            format!("registered as {}/{}", shape.group, shape.item),
        ));
    }

    let mut out = String::new();
    if let Some(id) = id {
        out.push_str("id: ");
        write_text(&mut out, id);
        out.push('\n');
    }

    out.push_str("item: {name: ");
    write_text(&mut out, group.item_name());
    out.push_str(", value: ");
    match group {
        Group::A(g) => write_text(&mut out, &g.item.value),
        Group::B(g) => write_integer(&mut out, g.item.value),
    }
    out.push_str("}\n");

    out.push_str("type: ");
    write_text(&mut out, tag.name());
    out.push('\n');

    tracing::trace!(tag = %tag, bytes = out.len(), "encoded group");
    Ok(out)
}
