//! # Bar Configuration
//!
//! Configuration for the breadcrumb address bar: how many items to show
//! before the display collapses, the separator drawn between items, button
//! sizing and the custom-label table.
//!
//! Configuration can be built programmatically, deserialized from a TOML
//! file, or picked up from `CRUMBBAR_*` environment variables:
//!
//! - `CRUMBBAR_CONFIG`: path to a TOML configuration file
//! - `CRUMBBAR_MAX_ITEMS`: maximum item count before ellipsis collapse
//! - `CRUMBBAR_SEPARATOR`: separator string drawn between items
//!
//! ```toml
//! max_items = 5
//! separator = " > "
//! button_height = 32
//! font_size = 10
//!
//! [custom_labels]
//! "/home/user" = "Home"
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::path::CustomLabels;

/// Default maximum number of displayed items before ellipsis collapse.
pub const DEFAULT_MAX_ITEMS: usize = 5;

/// Default breadcrumb button height in pixels.
pub const DEFAULT_BUTTON_HEIGHT: u32 = 32;

/// Default font size in points.
pub const DEFAULT_FONT_SIZE: u32 = 10;

/// Errors that can occur while loading a bar configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file was not found.
    #[error("Config file not found: {path:?}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing a configuration file.
    #[error("Failed to parse config file {path:?}: {details}")]
    ParseError {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration of a breadcrumb address bar.
///
/// All fields have sensible defaults, so partial TOML files deserialize
/// cleanly. The bar snapshots the configuration on every display rebuild;
/// there is no retained incremental state to invalidate.
///
/// ```rust
/// use crumbbar_core::config::BarConfig;
///
/// let config = BarConfig::new()
///     .with_max_items(7)
///     .with_separator(" > ")
///     .with_custom_label("/home/user", "Home");
///
/// assert_eq!(config.max_items(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarConfig {
    /// Maximum number of items shown before the display collapses.
    #[serde(default = "default_max_items")]
    max_items: usize,
    /// Separator string drawn between items. Empty means no separator.
    #[serde(default)]
    separator: String,
    /// Breadcrumb button height in pixels.
    #[serde(default = "default_button_height")]
    button_height: u32,
    /// Font size in points.
    #[serde(default = "default_font_size")]
    font_size: u32,
    /// Custom display labels, keyed by full path.
    #[serde(default)]
    custom_labels: CustomLabels,
}

fn default_max_items() -> usize {
    DEFAULT_MAX_ITEMS
}

fn default_button_height() -> u32 {
    DEFAULT_BUTTON_HEIGHT
}

fn default_font_size() -> u32 {
    DEFAULT_FONT_SIZE
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            separator: String::new(),
            button_height: DEFAULT_BUTTON_HEIGHT,
            font_size: DEFAULT_FONT_SIZE,
            custom_labels: CustomLabels::new(),
        }
    }
}

impl BarConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from environment variables or use defaults.
    ///
    /// `CRUMBBAR_CONFIG` takes precedence as a whole-file source; the
    /// individual `CRUMBBAR_MAX_ITEMS` and `CRUMBBAR_SEPARATOR` variables
    /// override on top of it. Unparseable values are logged and ignored.
    pub fn from_env_or_default() -> Self {
        let mut config = if let Ok(path) = env::var("CRUMBBAR_CONFIG") {
            match Self::from_file(&path) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!("Failed to load config from {path}: {err}");
                    Self::new()
                },
            }
        } else {
            Self::new()
        };

        if let Ok(value) = env::var("CRUMBBAR_MAX_ITEMS") {
            match value.parse::<usize>() {
                Ok(count) if count > 0 => config.max_items = count,
                _ => log::warn!("Ignoring invalid CRUMBBAR_MAX_ITEMS: {value}"),
            }
        }

        if let Ok(separator) = env::var("CRUMBBAR_SEPARATOR") {
            config.separator = separator;
        }

        config
    }

    /// Load a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|details| ConfigError::ParseError {
            path: path.to_path_buf(),
            details,
        })
    }

    /// Parse a configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|err| err.to_string())
    }

    /// Set the maximum item count.
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Set the separator drawn between items.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the breadcrumb button height in pixels.
    pub fn with_button_height(mut self, height: u32) -> Self {
        self.button_height = height;
        self
    }

    /// Set the font size in points.
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    /// Add a custom display label for a path.
    pub fn with_custom_label(
        mut self,
        path: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.custom_labels.insert(path.into(), label.into());
        self
    }

    /// Replace the whole custom-label table.
    pub fn with_custom_labels(mut self, labels: CustomLabels) -> Self {
        self.custom_labels = labels;
        self
    }

    /// The maximum number of items shown before ellipsis collapse.
    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// The separator drawn between items.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// The breadcrumb button height in pixels.
    pub fn button_height(&self) -> u32 {
        self.button_height
    }

    /// The font size in points.
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// The custom display label table.
    pub fn custom_labels(&self) -> &CustomLabels {
        &self.custom_labels
    }

    /// Mutable access to the custom display label table.
    pub fn custom_labels_mut(&mut self) -> &mut CustomLabels {
        &mut self.custom_labels
    }

    /// Set the maximum item count in place.
    pub fn set_max_items(&mut self, max_items: usize) {
        self.max_items = max_items;
    }

    /// Set the separator in place.
    pub fn set_separator(&mut self, separator: String) {
        self.separator = separator;
    }

    /// Set the button height in place.
    pub fn set_button_height(&mut self, height: u32) {
        self.button_height = height;
    }

    /// Set the font size in place.
    pub fn set_font_size(&mut self, size: u32) {
        self.font_size = size;
    }

    /// Replace the custom-label table in place.
    pub fn set_custom_labels(&mut self, labels: CustomLabels) {
        self.custom_labels = labels;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BarConfig::new();

        assert_eq!(config.max_items(), DEFAULT_MAX_ITEMS);
        assert_eq!(config.separator(), "");
        assert_eq!(config.button_height(), DEFAULT_BUTTON_HEIGHT);
        assert_eq!(config.font_size(), DEFAULT_FONT_SIZE);
        assert!(config.custom_labels().is_empty());
    }

    #[test]
    fn test_builder() {
        let config = BarConfig::new()
            .with_max_items(3)
            .with_separator(" / ")
            .with_button_height(40)
            .with_font_size(12)
            .with_custom_label("/home/user", "Home");

        assert_eq!(config.max_items(), 3);
        assert_eq!(config.separator(), " / ");
        assert_eq!(config.button_height(), 40);
        assert_eq!(config.font_size(), 12);
        assert_eq!(
            config.custom_labels().get("/home/user").map(String::as_str),
            Some("Home")
        );
    }

    #[test]
    fn test_from_toml_partial() {
        let config = BarConfig::from_toml("max_items = 7\n").unwrap();

        assert_eq!(config.max_items(), 7);
        assert_eq!(config.button_height(), DEFAULT_BUTTON_HEIGHT);
    }

    #[test]
    fn test_from_toml_custom_labels() {
        let toml = r#"
            separator = " > "

            [custom_labels]
            "/home/user" = "Home"
            "/mnt/backup" = "Backup"
        "#;
        let config = BarConfig::from_toml(toml).unwrap();

        assert_eq!(config.separator(), " > ");
        assert_eq!(config.custom_labels().len(), 2);
        assert_eq!(
            config.custom_labels().get("/mnt/backup").map(String::as_str),
            Some("Backup")
        );
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(BarConfig::from_toml("max_items = \"five\"").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = BarConfig::new()
            .with_max_items(6)
            .with_custom_label("/srv", "Services");

        let serialized = toml::to_string(&config).unwrap();
        let restored = BarConfig::from_toml(&serialized).unwrap();

        assert_eq!(config, restored);
    }
}
