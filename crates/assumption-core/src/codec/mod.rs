//! Text codec for groups.
//!
//! [`Codec`] pairs the encoder and the two-phase decoder with a
//! [`CodecConfig`]. The free functions [`serialize`] and [`deserialize`] use
//! the default configuration.
//!
//! ```rust
//! # fn main() -> Result<(), assumption_core::Error> {
//! use assumption_core::{deserialize, serialize, Group, GroupB, ItemB};
//!
//! let group = Group::B(GroupB::new(Some("345".into()), ItemB::new("B", 93)));
//! let text = serialize(&group)?;
//! assert_eq!(text, "id: '345'\nitem: {name: B, value: 93}\ntype: B\n");
//! assert_eq!(deserialize(&text)?, group);
//! # Ok(())
//! # }
//! ```
//!
//! # Module Structure
//!
//! - `scalar`: YAML literal rules for emitted scalars
//! - `encoder`: group → text
//! - `decoder`: text → group (tag-sniff, shape-parse, construct)
//! - `serde_impl`: `Serialize` / `Deserialize` for `Group`

pub mod decoder;
mod encoder;
mod scalar;
mod serde_impl;

use std::io::{Read, Write};

use serde_yaml::Value;

pub use decoder::{DecodeOutcome, DecodeState};

use crate::config::CodecConfig;
use crate::model::Group;
use crate::{Error, Result};

/// Encoder and decoder bound to one configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    #[must_use]
    pub const fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode a group to text.
    pub fn encode(&self, group: &Group) -> Result<String> {
        encoder::encode(group)
    }

    /// Encode a group into a writable sink.
    ///
    /// The document is fully encoded before anything is written.
    pub fn encode_to<W: Write>(&self, group: &Group, mut sink: W) -> Result<()> {
        let text = self.encode(group)?;
        sink.write_all(text.as_bytes())
            .and_then(|()| sink.flush())
            .map_err(|e| Error::io_error(format!("Failed to write document: {e}")))
    }

    /// Decode a document held in memory.
    pub fn decode(&self, text: &str) -> Result<Group> {
        decoder::decode_str(text, &self.config)
    }

    /// Decode an already parsed document tree.
    pub fn decode_value(&self, root: &Value) -> Result<Group> {
        decoder::decode_value(root, &self.config)
    }

    /// Decode a document, reporting the last state the decoder reached.
    pub fn decode_traced(&self, text: &str) -> DecodeOutcome {
        decoder::run_text(text, &self.config)
    }

    /// Read a whole character source and decode it.
    pub fn decode_from<R: Read>(&self, source: R) -> Result<Group> {
        let text = self.read_document(source)?;
        self.decode(&text)
    }

    /// Read a whole character source, bounded by `max_document_bytes`.
    ///
    /// At most `max_document_bytes + 1` bytes are read, so an oversized
    /// source fails without being buffered in full. The size check runs on
    /// raw bytes, before UTF-8 decoding.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] if the source fails
    /// - [`Error::DocumentTooLarge`] if the source exceeds the limit
    /// - [`Error::Syntax`] if the bytes are not UTF-8
    pub fn read_document<R: Read>(&self, source: R) -> Result<String> {
        let limit = self.config.max_document_bytes;
        let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
        let mut bytes = Vec::new();
        source
            .take(cap)
            .read_to_end(&mut bytes)
            .map_err(|e| Error::io_error(format!("Failed to read document: {e}")))?;

        if bytes.len() > limit {
            return Err(Error::DocumentTooLarge {
                size: bytes.len(),
                limit,
            });
        }
        String::from_utf8(bytes)
            .map_err(|e| Error::Syntax(format!("document is not valid UTF-8: {e}")))
    }
}

/// Encode a group with the default configuration.
pub fn serialize(group: &Group) -> Result<String> {
    Codec::default().encode(group)
}

/// Encode a group into a sink with the default configuration.
pub fn serialize_to<W: Write>(group: &Group, sink: W) -> Result<()> {
    Codec::default().encode_to(group, sink)
}

/// Decode a document with the default configuration.
pub fn deserialize(text: &str) -> Result<Group> {
    Codec::default().decode(text)
}

/// Read and decode a document with the default configuration.
pub fn deserialize_from<R: Read>(source: R) -> Result<Group> {
    Codec::default().decode_from(source)
}
