#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// `OutputFormat` selects how a decoded group is printed.
///
/// # Examples
///
/// ```
/// use assumption_core::OutputFormat;
///
/// assert_eq!("json".parse::<OutputFormat>().ok(), Some(OutputFormat::Json));
/// assert_eq!(OutputFormat::default(), OutputFormat::Yaml);
/// assert_eq!(OutputFormat::Yaml.to_string(), "yaml");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Canonical document text, as produced by the encoder
    #[default]
    Yaml,
    /// Pretty-printed JSON rendering of the group
    Json,
}

impl OutputFormat {
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    #[must_use]
    pub const fn is_yaml(&self) -> bool {
        matches!(self, Self::Yaml)
    }
}
