//! Encode command implementation
//!
//! Builds a group from command line values and writes its document.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use assumption_core::{
    Codec, Error, Group, GroupBuilder, Item, ItemA, ItemB, Tag, ValueKind,
};

/// Encode command options
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Group tag
    pub tag: Tag,
    /// Optional group id
    pub id: Option<String>,
    /// Item name
    pub name: String,
    /// Item value as typed on the command line
    pub value: String,
    /// Destination file; stdout when absent
    pub output: Option<PathBuf>,
}

/// Run the encode command
///
/// # Errors
///
/// Returns an error if:
/// - The value is not an integer and the tag is B
/// - The output file cannot be created or written
pub fn run(options: &EncodeOptions, codec: &Codec) -> Result<()> {
    let group = build_group(options)?;

    match &options.output {
        Some(path) => {
            let file = File::create(path)
                .map_err(Error::from)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            codec.encode_to(&group, file)?;
            tracing::info!(path = %path.display(), tag = %group.tag(), "document written");
        }
        None => codec.encode_to(&group, io::stdout().lock())?,
    }

    Ok(())
}

/// Build the group the options describe.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] when tag B is given a non-integer value.
pub fn build_group(options: &EncodeOptions) -> Result<Group> {
    let item: Item = match options.tag {
        Tag::A => ItemA::new(&options.name, &options.value).into(),
        Tag::B => {
            let value = options.value.trim().parse::<i64>().map_err(|_| {
                Error::shape_mismatch(
                    Tag::B.name(),
                    "item.value",
                    ValueKind::Integer.to_string(),
                    "string",
                )
            })?;
            ItemB::new(&options.name, value).into()
        }
    };

    let builder = GroupBuilder::new(options.tag).item(item);
    let builder = match &options.id {
        Some(id) => builder.id(id),
        None => builder,
    };
    Ok(builder.build()?)
}
