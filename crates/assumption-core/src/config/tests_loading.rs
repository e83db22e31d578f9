//! Loading-focused tests for configuration
//!
//! Tests for file parsing, layering order, and environment overrides.

#[cfg(test)]
mod loading_tests {
    use std::path::{Path, PathBuf};

    use serial_test::serial;

    use crate::config::{
        load_config_from, load_toml_file, CodecConfig, Config, ConfigSources, PartialConfig,
        DEFAULT_MAX_DOCUMENT_BYTES,
    };
    use crate::{Error, ErrorKind, OutputFormat, Result};

    const ENV_VARS: [&str; 3] = [
        "ASSUMPTION_STRICT_KEYS",
        "ASSUMPTION_MAX_DOCUMENT_BYTES",
        "ASSUMPTION_OUTPUT_FORMAT",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
    }

    fn write_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
        let path = dir.join(name);
        std::fs::write(&path, content)
            .map_err(|e| Error::io_error(format!("Failed to write test file: {e}")))?;
        Ok(path)
    }

    fn temp_dir() -> Result<tempfile::TempDir> {
        tempfile::tempdir().map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))
    }

    #[test]
    #[serial]
    fn test_no_config_files_returns_defaults() -> Result<()> {
        clear_env();
        let config = load_config_from(&ConfigSources::default())?;
        assert_eq!(config, Config::default());
        assert_eq!(config.codec.max_document_bytes, DEFAULT_MAX_DOCUMENT_BYTES);
        assert!(!config.codec.strict_keys);
        assert_eq!(config.output.format, OutputFormat::Yaml);
        Ok(())
    }

    #[test]
    #[serial]
    fn test_missing_files_are_skipped() -> Result<()> {
        clear_env();
        let dir = temp_dir()?;
        let sources = ConfigSources {
            global: Some(dir.path().join("absent-global.toml")),
            project: Some(dir.path().join("absent-project.toml")),
        };
        assert_eq!(load_config_from(&sources)?, Config::default());
        Ok(())
    }

    #[test]
    #[serial]
    fn test_project_overrides_global_per_key() -> Result<()> {
        clear_env();
        let dir = temp_dir()?;
        let global = write_file(
            dir.path(),
            "global.toml",
            "[codec]\nstrict_keys = true\nmax_document_bytes = 100\n",
        )?;
        let project = write_file(dir.path(), "project.toml", "[codec]\nmax_document_bytes = 200\n")?;

        let config = load_config_from(&ConfigSources {
            global: Some(global),
            project: Some(project),
        })?;

        assert_eq!(
            config.codec,
            CodecConfig {
                strict_keys: true,
                max_document_bytes: 200,
            }
        );
        Ok(())
    }

    #[test]
    #[serial]
    fn test_env_overrides_files() -> Result<()> {
        clear_env();
        let dir = temp_dir()?;
        let project = write_file(dir.path(), "project.toml", "[output]\nformat = \"yaml\"\n")?;

        std::env::set_var("ASSUMPTION_OUTPUT_FORMAT", "json");
        std::env::set_var("ASSUMPTION_STRICT_KEYS", "true");
        let result = load_config_from(&ConfigSources {
            global: None,
            project: Some(project),
        });
        clear_env();

        let config = result?;
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.codec.strict_keys);
        Ok(())
    }

    #[test]
    #[serial]
    fn test_invalid_env_value_is_config_error() {
        clear_env();
        std::env::set_var("ASSUMPTION_MAX_DOCUMENT_BYTES", "lots");
        let result = load_config_from(&ConfigSources::default());
        clear_env();

        let err = result.err();
        assert_eq!(err.as_ref().map(Error::kind), Some(ErrorKind::InvalidConfig));
        assert!(err.is_some_and(|e| e.to_string().contains("ASSUMPTION_MAX_DOCUMENT_BYTES")));
    }

    #[test]
    #[serial]
    fn test_zero_size_limit_fails_validation() -> Result<()> {
        clear_env();
        let dir = temp_dir()?;
        let project = write_file(dir.path(), "project.toml", "[codec]\nmax_document_bytes = 0\n")?;
        let result = load_config_from(&ConfigSources {
            global: None,
            project: Some(project),
        });
        assert_eq!(result.err().map(|e| e.kind()), Some(ErrorKind::InvalidConfig));
        Ok(())
    }

    #[test]
    fn test_malformed_toml_returns_parse_error() -> Result<()> {
        let dir = temp_dir()?;
        let path = write_file(dir.path(), "bad.toml", "[codec\nstrict_keys = ")?;
        let err = load_toml_file(&path).err();
        assert!(err.is_some_and(|e| e.to_string().contains("Failed to parse config file")));
        Ok(())
    }

    #[test]
    fn test_unknown_keys_rejected() -> Result<()> {
        let dir = temp_dir()?;
        let path = write_file(dir.path(), "typo.toml", "[codec]\nstrict_key = true\n")?;
        assert_eq!(
            load_toml_file(&path).err().map(|e| e.kind()),
            Some(ErrorKind::InvalidConfig)
        );
        Ok(())
    }

    #[test]
    fn test_directory_path_is_io_error() -> Result<()> {
        let dir = temp_dir()?;
        assert_eq!(
            load_toml_file(dir.path()).err().map(|e| e.kind()),
            Some(ErrorKind::Io)
        );
        Ok(())
    }

    #[test]
    fn test_empty_file_is_empty_partial() -> Result<()> {
        let dir = temp_dir()?;
        let path = write_file(dir.path(), "empty.toml", "")?;
        assert_eq!(load_toml_file(&path)?, PartialConfig::default());
        Ok(())
    }
}
