//! Configuration directory and persistent defaults

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::index::{Coverage, DEFAULT_PREFIX_LENGTH};
use crate::mapping::MappingKind;

/// Threshold used when neither the command line nor the config sets one.
pub const DEFAULT_THRESHOLD: usize = 2;

/// Get the configuration directory for state-set-index
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("Could not determine local data directory")?;
    Ok(base.join("state-set-index"))
}

/// Get the default config file path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Get the config file path with optional override
pub fn config_file_path(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => {
            validate_config_path(path)?;
            Ok(path.to_path_buf())
        }
        None => default_config_path(),
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// User defaults stored in the config file.
///
/// Every field is optional; unset fields fall back to the built-in defaults
/// in [`resolve`](Self::resolve).
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PersistentConfig {
    /// Default maximum edit distance
    pub threshold: Option<usize>,
    /// Default prefix length
    pub prefix_length: Option<usize>,
    /// Default alphabet mapping
    pub mapping: Option<MappingKind>,
    /// Default candidate coverage
    pub coverage: Option<Coverage>,
}

impl PersistentConfig {
    /// Load configuration from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        validate_config_path(path)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(
        &self,
        threshold: Option<usize>,
        prefix_length: Option<usize>,
        mapping: Option<MappingKind>,
        coverage: Option<Coverage>,
    ) -> Self {
        Self {
            threshold: threshold.or(self.threshold),
            prefix_length: prefix_length.or(self.prefix_length),
            mapping: mapping.or(self.mapping),
            coverage: coverage.or(self.coverage),
        }
    }

    /// Fill unset fields with the built-in defaults.
    pub fn resolve(&self) -> IndexSettings {
        IndexSettings {
            threshold: self.threshold.unwrap_or(DEFAULT_THRESHOLD),
            prefix_length: self.prefix_length.unwrap_or(DEFAULT_PREFIX_LENGTH),
            mapping: self.mapping.unwrap_or_default(),
            coverage: self.coverage.unwrap_or_default(),
        }
    }
}

/// Fully resolved index and lookup settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSettings {
    /// Maximum edit distance
    pub threshold: usize,
    /// Characters indexed per entry
    pub prefix_length: usize,
    /// Alphabet mapping
    pub mapping: MappingKind,
    /// Candidate coverage
    pub coverage: Coverage,
}

impl Default for IndexSettings {
    fn default() -> Self {
        PersistentConfig::default().resolve()
    }
}
