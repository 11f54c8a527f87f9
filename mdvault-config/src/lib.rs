//! Configuration for the mdvault tools
//!
//! The defaults live in `defaults/mdvault.default.toml` and are compiled in, so a
//! vault without any settings file behaves exactly as documented there. A working
//! directory `mdvault.toml`, the vault's `.mdvault.toml` and an explicit file can be
//! stacked on top with [`Loader`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdvault_engine::{ArchiveRules, FormattingRules};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdvault.default.toml");

/// Top-level configuration consumed by mdvault applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdvaultConfig {
    pub formatting: FormattingConfig,
    pub archive: ArchiveConfig,
    pub vault: VaultConfig,
}

/// Formatting-related configuration groups.
#[derive(Debug, Clone, Deserialize)]
pub struct FormattingConfig {
    pub rules: FormattingRulesConfig,
}

/// Mirrors the knobs exposed by the markdown renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct FormattingRulesConfig {
    pub indent_width: usize,
    pub unordered_marker: char,
}

impl From<FormattingRulesConfig> for FormattingRules {
    fn from(config: FormattingRulesConfig) -> Self {
        FormattingRules {
            indent_width: config.indent_width,
            unordered_marker: config.unordered_marker,
        }
    }
}

impl From<&FormattingRulesConfig> for FormattingRules {
    fn from(config: &FormattingRulesConfig) -> Self {
        FormattingRules {
            indent_width: config.indent_width,
            unordered_marker: config.unordered_marker,
        }
    }
}

/// Where completed items go, and which files take part.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveConfig {
    pub heading: String,
    pub heading_level: usize,
    /// Tag (without `#`) a file must carry in its leading tag block to be archived
    pub tag: String,
}

impl From<ArchiveConfig> for ArchiveRules {
    fn from(config: ArchiveConfig) -> Self {
        ArchiveRules {
            heading: config.heading,
            heading_level: config.heading_level,
        }
    }
}

impl From<&ArchiveConfig> for ArchiveRules {
    fn from(config: &ArchiveConfig) -> Self {
        ArchiveRules {
            heading: config.heading.clone(),
            heading_level: config.heading_level,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VaultConfig {
    /// File extensions, without the leading dot
    pub extensions: Vec<String>,
}

/// Name of the per-vault settings file, looked up in the vault root.
pub const VAULT_CONFIG_FILE: &str = ".mdvault.toml";

/// Builds an [`MdvaultConfig`] from the embedded defaults plus any number of TOML
/// layers; later layers win key by key.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder()
                .add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Add a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Add a TOML file that is skipped when absent.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    /// Add the vault's own `.mdvault.toml`, if it has one.
    pub fn with_vault(self, vault_root: impl AsRef<Path>) -> Self {
        let path = vault_root.as_ref().join(VAULT_CONFIG_FILE);
        self.layer(&path, false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set one dotted key, e.g. `archive.heading`, above every file layer.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<MdvaultConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<MdvaultConfig, ConfigError> {
    Loader::new().build()
}
