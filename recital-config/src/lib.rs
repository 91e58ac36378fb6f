//! Shared configuration loader for the recital toolchain.
//!
//! `defaults/recital.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer project files and
//! environment variables on top of those defaults via [`Loader`] before
//! deserializing into [`RecitalConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/recital.default.toml");

/// Prefix for environment overrides, e.g. `RECITAL_DOCUMENT__DEFAULT_TITLE`.
pub const ENV_PREFIX: &str = "RECITAL";

/// Top-level configuration consumed by recital applications.
#[derive(Debug, Clone, Deserialize)]
pub struct RecitalConfig {
    pub document: DocumentConfig,
    pub convert: ConvertConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    pub default_title: String,
}

/// Conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub format: String,
    #[serde(default)]
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HtmlConfig {
    /// Page shell file; `None` selects the built-in shell.
    pub template: Option<String>,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `RECITAL_*` environment variables; `__` separates nested keys.
    pub fn with_env(mut self) -> Self {
        self.builder = self
            .builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<RecitalConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RecitalConfig, ConfigError> {
    Loader::new().build()
}
