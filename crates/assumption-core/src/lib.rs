//! # Assumption Core
//!
//! Tagged groups and their tag-driven YAML codec, with zero unwraps.
//!
//! A [`Group`] is either a [`GroupA`] holding an [`ItemA`] (text value) or a
//! [`GroupB`] holding an [`ItemB`] (integer value). The encoder writes the
//! group's tag into the document; the decoder reads that tag first and only
//! then parses the payload against the shape registered for it.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` - returns `Result` instead
//! - No `expect()` - returns `Result` instead
//! - No `panic!()` - returns `Result` instead
//! - No `unsafe` - safe Rust only
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, Error>`. A failed decode never
//! yields a partial group and a failed encode never yields partial text.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod config;
mod error;
pub mod model;
mod output_format;
pub mod registry;

pub use codec::{
    deserialize, deserialize_from, serialize, serialize_to, Codec, DecodeOutcome, DecodeState,
};
pub use config::{CodecConfig, Config};
pub use error::{Error, ErrorKind, Result};
pub use model::{
    Group, GroupA, GroupB, GroupBuilder, GroupKind, Item, ItemA, ItemB, ItemKind, Tag, ValueKind,
};
pub use output_format::OutputFormat;
pub use registry::Shape;
