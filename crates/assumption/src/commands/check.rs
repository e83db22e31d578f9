//! Check command implementation

use std::path::PathBuf;

use anyhow::Result;
use assumption_core::Codec;

use super::read_document;

/// Check command options
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Source file; stdin when absent
    pub input: Option<PathBuf>,
}

/// Run the check command, printing `ok: <tag>` for a valid document.
///
/// # Errors
///
/// Returns the decode error, with the last state the decoder reached as
/// context.
pub fn run(options: &CheckOptions, codec: &Codec) -> Result<()> {
    let text = read_document(options.input.as_deref(), codec)?;
    let outcome = codec.decode_traced(&text);

    match outcome.result {
        Ok(group) => {
            println!("ok: {}", group.tag());
            Ok(())
        }
        Err(err) => {
            tracing::debug!(reached = %outcome.reached, "check failed");
            Err(anyhow::Error::new(err)
                .context(format!("document rejected after state '{}'", outcome.reached)))
        }
    }
}
