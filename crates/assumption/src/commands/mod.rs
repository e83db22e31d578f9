//! Commands module for the assumption CLI
//!
//! Provides command implementations for encode, decode, and check.

pub mod check;
pub mod decode;
pub mod encode;

use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use assumption_core::Codec;

/// Read a document from `input`, or stdin when absent, within the codec's
/// size limit.
pub fn read_document(input: Option<&Path>, codec: &Codec) -> Result<String> {
    let text = match input {
        Some(path) => {
            let file = File::open(path)
                .map_err(assumption_core::Error::from)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            codec
                .read_document(file)
                .with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => codec
            .read_document(io::stdin().lock())
            .context("Failed to read stdin")?,
    };

    tracing::debug!(bytes = text.len(), "document read");
    Ok(text)
}
