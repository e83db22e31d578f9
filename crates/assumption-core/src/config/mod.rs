//! Configuration loading and management
//!
//! # Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Global config: <config dir>/assumption/config.toml
//! 3. Project config: .assumption/config.toml
//! 4. Environment variables: ASSUMPTION_*
//! 5. CLI flags (command-specific)
//!
//! # Example Config
//!
//! ```toml
//! [codec]
//! strict_keys = false
//! max_document_bytes = 1048576
//!
//! [output]
//! format = "yaml"
//! ```

mod load;
mod types;

#[cfg(test)]
mod tests_loading;

pub use load::{
    global_config_path, load_config, load_config_from, load_toml_file, project_config_path,
    ConfigSources,
};
pub use types::{
    CodecConfig, Config, OutputConfig, PartialCodecConfig, PartialConfig, PartialOutputConfig,
    DEFAULT_MAX_DOCUMENT_BYTES,
};
