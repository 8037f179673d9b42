//! Configuration loader for simple-list.
//!
//! Sources are applied lowest priority first:
//!
//!     1. `defaults/simple-list.default.toml`, embedded at compile time
//!     2. `simple-list.toml` in the working directory, when present
//!     3. a file named on the command line (`--config`), which must exist
//!     4. single-key overrides from command-line flags
//!
//! [`Loader`] collects the sources and deserializes into [`SimpleListConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/simple-list.default.toml");

/// Picked up from the working directory by [`Loader::discover`].
pub const LOCAL_FILE: &str = "simple-list.toml";

/// Top-level configuration consumed by the simple-list binary.
#[derive(Debug, Clone, Deserialize)]
pub struct SimpleListConfig {
    pub bench: BenchConfig,
    #[serde(default)]
    pub list: ListConfig,
}

/// Knobs for the list vs `Vec` comparison.
#[derive(Debug, Clone, Deserialize)]
pub struct BenchConfig {
    pub elements: usize,
    pub format: ReportFormat,
}

/// Settings for lists built by `simple-list run`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListConfig {
    /// Maximum number of elements; absent means unbounded.
    #[serde(default)]
    pub capacity: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    Text,
    Json,
}

/// Collects configuration sources on top of the embedded defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Only the embedded defaults.
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Defaults plus [`LOCAL_FILE`] from `dir`, if that file exists.
    pub fn discover(dir: impl AsRef<Path>) -> Self {
        Self::new().with_optional_file(dir.as_ref().join(LOCAL_FILE))
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// Layer a TOML file, skipping it when absent.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), false)
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path)
            .format(FileFormat::Toml)
            .required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one dotted key, e.g. `bench.elements`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<SimpleListConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
