//! Configuration for the itinerary prettifier.
//!
//! Layers, lowest first:
//! 1. `defaults/itinerary.default.toml`, embedded at compile time
//! 2. `itinerary.toml` in the working directory, if present
//! 3. the file passed with `--config`
//! 4. command-line overrides such as `-v`

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/itinerary.default.toml");

/// Top-level configuration consumed by the prettifier
#[derive(Debug, Clone, Deserialize)]
pub struct ItineraryConfig {
    pub reference: ReferenceConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Where the airport lookup comes from
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceConfig {
    pub default_path: String,
}

/// Shape of the written file
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub collapse_blank_lines: bool,
    pub trailing_newline: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Builds an [`ItineraryConfig`] from the embedded defaults plus any layers
/// added on top. Later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Loader holding only the embedded defaults
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer a TOML file that must exist (`--config`)
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// Layer a TOML file if it exists (`itinerary.toml` in the working directory)
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), false)
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set one key above every file layer (`-v` raises `logging.level`)
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers and deserialize
    pub fn build(self) -> Result<ItineraryConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(config.reference.default_path, "airport-lookup.csv");
        assert!(config.output.collapse_blank_lines);
        assert!(config.output.trailing_newline);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.collapse_blank_lines", false)
            .expect("override to apply")
            .set_override("logging.level", "debug")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(!config.output.collapse_blank_lines);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn layers_user_file_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[reference]\ndefault_path = \"data/airports.csv\"").unwrap();

        let config = Loader::new().with_file(&path).build().expect("config to build");
        assert_eq!(config.reference.default_path, "data/airports.csv");
        // Untouched sections keep their defaults
        assert!(config.output.trailing_newline);
    }

    #[test]
    fn optional_file_may_be_missing() {
        let config = Loader::new()
            .with_optional_file("/no/such/itinerary.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn required_file_must_exist() {
        assert!(Loader::new().with_file("/no/such/itinerary.toml").build().is_err());
    }

    #[test]
    fn override_beats_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("itinerary.toml");
        std::fs::write(&path, "[logging]\nlevel = \"error\"\n").unwrap();

        let config = Loader::new()
            .with_optional_file(&path)
            .set_override("logging.level", "info")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn optional_file_is_layered_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("itinerary.toml");
        std::fs::write(&path, "[output]\ntrailing_newline = false\n").unwrap();

        let config = Loader::new().with_optional_file(&path).build().expect("config to build");
        assert!(!config.output.trailing_newline);
        assert!(config.output.collapse_blank_lines);
    }
}
