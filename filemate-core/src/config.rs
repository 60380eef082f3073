use crate::pattern::NamePattern;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default rename template when none is given.
pub const DEFAULT_PATTERN: &str = "file_{i}";

/// Default starting index for enumeration.
pub const DEFAULT_START: u32 = 1;

/// Maximum conflict-resolution attempts per file before it is skipped.
pub const MAX_CONFLICT_ATTEMPTS: u32 = 10;

/// A configuration problem. Always raised before any file is touched,
/// never as a per-file failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not a valid directory")]
    NotADirectory(PathBuf),
    #[error("pattern {0:?} must contain an {{i}} index placeholder")]
    MissingPlaceholder(String),
    #[error("pattern {0:?} contains more than one {{i}} placeholder")]
    MultiplePlaceholders(String),
    #[error("invalid index modifier {0:?}: expected a width like {{i:03}}")]
    InvalidModifier(String),
    #[error("start index must be at least 1")]
    StartIndexTooSmall,
    #[error("maximum conflict attempts must be at least 1")]
    ZeroAttempts,
    #[error("extension filter value cannot be empty")]
    EmptyExtension,
}

/// A set of source extensions to match against, normalized to
/// dot-prefixed lowercase. Input values are accepted with or without a
/// leading dot and compared case-insensitively, so `jpg`, `.jpg` and
/// `JPG` are equivalent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    values: BTreeSet<String>,
}

impl ExtensionFilter {
    /// Parse a comma-separated list such as `jpg,.JPEG, png`.
    pub fn parse(list: &str) -> Result<Self, ConfigError> {
        let mut values = BTreeSet::new();
        for raw in list.split(',') {
            let value = raw.trim();
            if value.is_empty() {
                continue;
            }
            let value = value.trim_start_matches('.').to_ascii_lowercase();
            if value.is_empty() {
                return Err(ConfigError::EmptyExtension);
            }
            values.insert(format!(".{value}"));
        }
        if values.is_empty() {
            return Err(ConfigError::EmptyExtension);
        }
        Ok(Self { values })
    }

    /// `suffix` is a dot-prefixed extension in its original case, or an
    /// empty string for files without one.
    pub fn matches(&self, suffix: &str) -> bool {
        self.values.contains(&suffix.to_ascii_lowercase())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

/// Parameters for one batch-rename invocation.
///
/// Built by the caller, validated once via [`RenameConfig::validate`]
/// before any file is touched.
#[derive(Debug, Clone)]
pub struct RenameConfig {
    /// Directory whose direct children are renamed.
    pub folder: PathBuf,
    /// Rename template with a single `{i}` placeholder.
    pub pattern: String,
    /// Keep only files with one of these extensions.
    pub extensions: Option<ExtensionFilter>,
    /// Keep only files whose name starts with this exact prefix.
    pub prefix: Option<String>,
    /// First index assigned; must be at least 1.
    pub start: u32,
    /// Move renamed files here instead of renaming in place.
    pub output_dir: Option<PathBuf>,
    /// Overwrite an existing file at the target path.
    pub force: bool,
    /// Compute outcomes without mutating the filesystem.
    pub dry_run: bool,
    /// Conflict-resolution attempts per file.
    pub max_attempts: u32,
}

impl RenameConfig {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            pattern: DEFAULT_PATTERN.to_string(),
            extensions: None,
            prefix: None,
            start: DEFAULT_START,
            output_dir: None,
            force: false,
            dry_run: false,
            max_attempts: MAX_CONFLICT_ATTEMPTS,
        }
    }

    /// Check the configuration and parse the pattern. Returns the
    /// compiled pattern so callers validate and compile in one step.
    pub fn validate(&self) -> Result<NamePattern, ConfigError> {
        if !self.folder.is_dir() {
            return Err(ConfigError::NotADirectory(self.folder.clone()));
        }
        if self.start < 1 {
            return Err(ConfigError::StartIndexTooSmall);
        }
        if self.max_attempts < 1 {
            return Err(ConfigError::ZeroAttempts);
        }
        NamePattern::parse(&self.pattern)
    }
}

/// Parameters for one extension-change invocation.
#[derive(Debug, Clone)]
pub struct ChangeExtConfig {
    /// Directory whose direct children are processed.
    pub folder: PathBuf,
    /// Target extension, with or without a leading dot.
    pub to_extension: String,
    /// Keep only files with one of these source extensions.
    pub from_extensions: Option<ExtensionFilter>,
    /// Keep only files whose name starts with this exact prefix.
    pub prefix: Option<String>,
    /// Move changed files here instead of renaming in place.
    pub output_dir: Option<PathBuf>,
    /// Overwrite an existing file at the target path.
    pub force: bool,
    /// Compute outcomes without mutating the filesystem.
    pub dry_run: bool,
}

impl ChangeExtConfig {
    pub fn new(folder: impl Into<PathBuf>, to_extension: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            to_extension: to_extension.into(),
            from_extensions: None,
            prefix: None,
            output_dir: None,
            force: false,
            dry_run: false,
        }
    }

    /// Check the configuration and return the target extension
    /// normalized to a single leading dot, case preserved.
    pub fn validate(&self) -> Result<String, ConfigError> {
        if !self.folder.is_dir() {
            return Err(ConfigError::NotADirectory(self.folder.clone()));
        }
        let value = self.to_extension.trim();
        let bare = value.trim_start_matches('.');
        if bare.is_empty() {
            return Err(ConfigError::EmptyExtension);
        }
        Ok(format!(".{bare}"))
    }
}

/// Optional defaults file, loaded from `.filemate/config.toml` in the
/// working directory. Supplies CLI defaults only; the engine never
/// reads it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default rename template
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Default starting index
    #[serde(default = "default_start")]
    pub start: u32,

    /// Default output format: "summary" or "json"
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            start: default_start(),
            output: default_output(),
        }
    }
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

fn default_start() -> u32 {
    DEFAULT_START
}

fn default_output() -> String {
    "summary".to_string()
}

impl Config {
    /// Load config from .filemate/config.toml if it exists
    pub fn load() -> Result<Self> {
        if let Ok(cwd) = std::env::current_dir() {
            let config_path = cwd.join(".filemate").join("config.toml");
            if config_path.exists() {
                return Self::load_from_path(&config_path);
            }
        }

        // Return default config if no config file exists
        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
