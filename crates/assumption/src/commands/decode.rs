//! Decode command implementation
//!
//! Reads a document and prints the group it holds.

use std::path::PathBuf;

use anyhow::{Context, Result};
use assumption_core::{Codec, Group, OutputFormat};

use super::read_document;

/// Decode command options
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Source file; stdin when absent
    pub input: Option<PathBuf>,
    /// How to print the decoded group
    pub format: OutputFormat,
}

/// Run the decode command
///
/// # Errors
///
/// Returns an error if the input cannot be read or does not decode.
pub fn run(options: &DecodeOptions, codec: &Codec) -> Result<()> {
    let text = read_document(options.input.as_deref(), codec)?;
    let group = codec.decode(&text)?;
    let rendered = render(&group, options.format, codec)?;

    print!("{rendered}");
    Ok(())
}

/// Render a group as canonical YAML or pretty JSON, newline terminated.
pub fn render(group: &Group, format: OutputFormat, codec: &Codec) -> Result<String> {
    match format {
        OutputFormat::Yaml => Ok(codec.encode(group)?),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(group).context("Failed to render group as JSON")?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use assumption_core::{GroupA, GroupB, ItemA, ItemB};

    use super::*;

    #[test]
    fn test_render_yaml_is_canonical() {
        let group = Group::A(GroupA::new(None, ItemA::new("A", "Item A")));
        let text = render(&group, OutputFormat::Yaml, &Codec::default()).unwrap();
        assert_eq!(text, "item: {name: A, value: Item A}\ntype: A\n");
    }

    #[test]
    fn test_render_json_keeps_tag_and_types() {
        let group = Group::B(GroupB::new(Some("345".to_string()), ItemB::new("B", 93)));
        let text = render(&group, OutputFormat::Json, &Codec::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["type"], "B");
        assert_eq!(value["id"], "345");
        assert_eq!(value["item"]["value"], 93);
        assert!(text.ends_with('\n'));
    }
}
