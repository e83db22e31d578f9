//! Error types for the assumption codec.
//!
//! Errors fall into three groups:
//!
//! - **Decode errors**: the document is not a valid encoding of any group
//!   (missing/malformed/unknown tag, shape mismatch, syntax). Exit code 1.
//! - **System errors**: reading or writing a stream, loading configuration.
//!   Exit code 2.
//! - **Internal errors**: a group that disagrees with its own tag, or a tag
//!   the registry does not know how to encode. Exit code 3.
//!
//! Every error is terminal for the call that raised it.

use strum::{Display, IntoStaticStr};
use thiserror::Error;

/// Core error type for codec operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The document has no `type` key
    #[error("document has no 'type' key")]
    MissingTag,

    /// The `type` key is present but is not a string
    #[error("'type' must be a string, found {found}")]
    MalformedTag {
        /// YAML kind of the value that was found
        found: String,
    },

    /// The `type` string does not name a known tag
    #[error("unknown tag '{tag}'")]
    UnknownTag {
        /// The offending tag name
        tag: String,
    },

    /// A field does not have the shape required by the resolved tag
    #[error("shape mismatch for tag {tag} at '{field}': expected {expected}, found {found}")]
    ShapeMismatch {
        /// Tag the document was resolved to
        tag: String,
        /// Dotted path of the offending field
        field: String,
        /// Expected kind
        expected: String,
        /// Actual kind
        found: String,
    },

    /// A group variant disagrees with its tag
    #[error("inconsistent group variant {variant}: {detail}")]
    Consistency {
        /// The offending variant
        variant: String,
        /// What disagreed
        detail: String,
    },

    /// The encoder has no registered shape for the tag
    #[error("unable to serialize group of type {tag}")]
    UnsupportedTag {
        /// The tag without a registry entry
        tag: String,
    },

    /// A key that no shape declares (strict mode only)
    #[error("unexpected key '{path}'")]
    UnexpectedKey {
        /// Dotted path of the key
        path: String,
    },

    /// The document parsed, but its root is not a mapping
    #[error("malformed document: {detail}")]
    MalformedDocument {
        /// What was wrong with the root
        detail: String,
    },

    /// The document is not valid YAML
    #[error("syntax error: {0}")]
    Syntax(String),

    /// The document exceeds the configured size limit
    #[error("document is {size} bytes, limit is {limit}")]
    DocumentTooLarge {
        /// Size of the input
        size: usize,
        /// Configured limit
        limit: usize,
    },

    /// Reading or writing a stream failed
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration could not be loaded or is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Fieldless discriminant of [`Error`], used for matching and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    MissingTag,
    MalformedTag,
    UnknownTag,
    ShapeMismatch,
    Consistency,
    UnsupportedTag,
    UnexpectedKey,
    MalformedDocument,
    Syntax,
    DocumentTooLarge,
    Io,
    InvalidConfig,
}

impl Error {
    /// Create a shape mismatch error.
    pub fn shape_mismatch(
        tag: impl Into<String>,
        field: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::ShapeMismatch {
            tag: tag.into(),
            field: field.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a consistency error for a group variant.
    pub fn consistency(variant: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Consistency {
            variant: variant.into(),
            detail: detail.into(),
        }
    }

    /// Create an IO error.
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Create a configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Get the fieldless kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingTag => ErrorKind::MissingTag,
            Self::MalformedTag { .. } => ErrorKind::MalformedTag,
            Self::UnknownTag { .. } => ErrorKind::UnknownTag,
            Self::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            Self::Consistency { .. } => ErrorKind::Consistency,
            Self::UnsupportedTag { .. } => ErrorKind::UnsupportedTag,
            Self::UnexpectedKey { .. } => ErrorKind::UnexpectedKey,
            Self::MalformedDocument { .. } => ErrorKind::MalformedDocument,
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::DocumentTooLarge { .. } => ErrorKind::DocumentTooLarge,
            Self::Io(_) => ErrorKind::Io,
            Self::InvalidConfig(_) => ErrorKind::InvalidConfig,
        }
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) | Self::InvalidConfig(_) => 2,
            Self::Consistency { .. } | Self::UnsupportedTag { .. } => 3,
            _ => 1,
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Syntax(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, Error>;
