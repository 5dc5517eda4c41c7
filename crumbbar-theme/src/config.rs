//! # Theme Configuration
//!
//! Selects the theme to use from environment variables, a TOML file or
//! programmatic configuration, with a fallback when the primary source
//! fails.
//!
//! ## Environment Variables
//!
//! - `CRUMBBAR_THEME`: the default theme (`light`, `dark`, or
//!   `file:<path>` for a [CustomTheme] file)
//! - `CRUMBBAR_THEME_FALLBACK`: fallback theme if the primary fails
//! - `CRUMBBAR_THEME_CONFIG`: path to a theme configuration file
//!
//! ## Configuration File Format
//!
//! ```toml
//! [theme]
//! default = "dark"
//! fallback = "light"
//! ```

use std::env;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{ThemeError, ThemeResult};
use crate::theme::custom::CustomTheme;
use crate::theme::dark::DarkTheme;
use crate::theme::light::LightTheme;
use crate::theme::Theme;

/// A source for theme configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    /// The built-in light theme.
    Light,
    /// The built-in dark theme.
    Dark,
    /// A theme loaded from a TOML file.
    File(String),
}

/// Theme selection configuration.
///
/// ```rust
/// use crumbbar_theme::config::{ThemeConfig, ThemeSource};
///
/// let config = ThemeConfig::new()
///     .with_default_theme(ThemeSource::Dark)
///     .with_fallback_theme(ThemeSource::Light);
///
/// let theme = config.resolve_theme().unwrap();
/// assert_eq!(theme.name(), "dark");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// The default theme source.
    pub default_theme: ThemeSource,
    /// The fallback theme source, tried when the default fails to resolve.
    pub fallback_theme: Option<ThemeSource>,
}

#[derive(Deserialize)]
struct ThemeConfigFile {
    theme: ThemeTable,
}

#[derive(Deserialize)]
struct ThemeTable {
    default: Option<String>,
    fallback: Option<String>,
}

impl ThemeConfig {
    /// Create a theme configuration with default settings.
    pub fn new() -> Self {
        Self {
            default_theme: ThemeSource::Light,
            fallback_theme: Some(ThemeSource::Dark),
        }
    }

    /// Create a theme configuration from environment variables or defaults.
    pub fn from_env_or_default() -> Self {
        let mut config = Self::new();

        if let Ok(config_path) = env::var("CRUMBBAR_THEME_CONFIG") {
            match Self::from_file(&config_path) {
                Ok(file_config) => config = file_config,
                Err(err) => log::warn!("Failed to load theme config: {err}"),
            }
        }

        if let Ok(theme_env) = env::var("CRUMBBAR_THEME") {
            config.default_theme = Self::parse_theme_source(&theme_env);
        }

        if let Ok(fallback_env) = env::var("CRUMBBAR_THEME_FALLBACK") {
            config.fallback_theme = Some(Self::parse_theme_source(&fallback_env));
        }

        config
    }

    /// Load a theme configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::file_not_found(path));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|details| ThemeError::parse_error(path, details))
    }

    /// Parse a theme configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        let file: ThemeConfigFile = toml::from_str(content).map_err(|e| e.to_string())?;
        let mut config = Self::new();

        if let Some(default) = file.theme.default {
            config.default_theme = Self::parse_theme_source(&default);
        }
        if let Some(fallback) = file.theme.fallback {
            config.fallback_theme = Some(Self::parse_theme_source(&fallback));
        }

        Ok(config)
    }

    /// Set the default theme source.
    pub fn with_default_theme(mut self, theme: ThemeSource) -> Self {
        self.default_theme = theme;
        self
    }

    /// Set the fallback theme source.
    pub fn with_fallback_theme(mut self, theme: ThemeSource) -> Self {
        self.fallback_theme = Some(theme);
        self
    }

    /// Resolve the configured theme.
    ///
    /// Falls back to the fallback source when the default fails; the
    /// failure is logged, not swallowed silently.
    pub fn resolve_theme(&self) -> ThemeResult<Arc<dyn Theme + Send + Sync>> {
        match Self::resolve_source(&self.default_theme) {
            Ok(theme) => Ok(theme),
            Err(err) => match &self.fallback_theme {
                Some(fallback) => {
                    log::warn!("Falling back from default theme: {err}");
                    Self::resolve_source(fallback)
                },
                None => Err(err),
            },
        }
    }

    /// Resolve a specific theme source.
    pub fn resolve_source(source: &ThemeSource) -> ThemeResult<Arc<dyn Theme + Send + Sync>> {
        match source {
            ThemeSource::Light => Ok(Arc::new(LightTheme::new())),
            ThemeSource::Dark => Ok(Arc::new(DarkTheme::new())),
            ThemeSource::File(path) => Ok(Arc::new(CustomTheme::from_file(path)?)),
        }
    }

    /// Parse a theme source from a string.
    ///
    /// Unrecognized names resolve to the light theme.
    pub fn parse_theme_source(source: &str) -> ThemeSource {
        match source.to_lowercase().as_str() {
            "light" => ThemeSource::Light,
            "dark" => ThemeSource::Dark,
            s if s.starts_with("file:") => {
                ThemeSource::File(s.strip_prefix("file:").unwrap().to_string())
            },
            other => {
                log::warn!("Unknown theme '{other}', using light");
                ThemeSource::Light
            },
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_theme_source() {
        assert_eq!(ThemeConfig::parse_theme_source("dark"), ThemeSource::Dark);
        assert_eq!(ThemeConfig::parse_theme_source("Light"), ThemeSource::Light);
        assert_eq!(
            ThemeConfig::parse_theme_source("file:my.toml"),
            ThemeSource::File("my.toml".to_string())
        );
        assert_eq!(
            ThemeConfig::parse_theme_source("plasma"),
            ThemeSource::Light
        );
    }

    #[test]
    fn test_from_toml() {
        let config = ThemeConfig::from_toml(
            r#"
            [theme]
            default = "dark"
            fallback = "light"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_theme, ThemeSource::Dark);
        assert_eq!(config.fallback_theme, Some(ThemeSource::Light));
    }

    #[test]
    fn test_resolve_builtin() {
        let config = ThemeConfig::new().with_default_theme(ThemeSource::Dark);
        assert_eq!(config.resolve_theme().unwrap().name(), "dark");
    }

    #[test]
    fn test_resolve_falls_back() {
        let config = ThemeConfig::new()
            .with_default_theme(ThemeSource::File("/missing/theme.toml".into()))
            .with_fallback_theme(ThemeSource::Dark);

        assert_eq!(config.resolve_theme().unwrap().name(), "dark");
    }

    #[test]
    fn test_resolve_error_without_fallback() {
        let config = ThemeConfig {
            default_theme: ThemeSource::File("/missing/theme.toml".into()),
            fallback_theme: None,
        };

        assert!(config.resolve_theme().is_err());
    }
}
