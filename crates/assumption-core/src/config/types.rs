//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::OutputFormat;

/// Default upper bound on the size of a decoded document (1 MiB).
pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 1024 * 1024;

/// Complete, resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub codec: CodecConfig,
    pub output: OutputConfig,
}

/// Decoder behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Reject keys that no shape declares instead of ignoring them
    pub strict_keys: bool,
    /// Documents longer than this fail before parsing
    pub max_document_bytes: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            strict_keys: false,
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }
}

/// How the CLI prints decoded groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// One config file: every key optional, unknown keys rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialConfig {
    pub codec: PartialCodecConfig,
    pub output: PartialOutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialCodecConfig {
    pub strict_keys: Option<bool>,
    pub max_document_bytes: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialOutputConfig {
    pub format: Option<OutputFormat>,
}
