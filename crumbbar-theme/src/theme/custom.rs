//! Themes loaded from TOML files.
//!
//! A theme file names the theme, sets the surface colors and carries one
//! color table per styled widget:
//!
//! ```toml
//! name = "midnight"
//! window_background = "#101014"
//! separator = "#55556a"
//!
//! [styles.BreadcrumbItem]
//! color_hovered = "#26263a"
//! color_text = "#d8d8e8"
//!
//! [styles.CurrentCrumb]
//! color_background = "#7755ff"
//! color_text = "#ffffff"
//! ```

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::color::Color;
use crate::error::{ThemeError, ThemeResult};
use crate::id::WidgetId;
use crate::style::Style;
use crate::theme::Theme;

/// A theme deserialized from a TOML file.
///
/// Widget tables are keyed by the widget type name (the `id` part of the
/// [WidgetId]); the namespace is implied to be `crumbbar-widgets`.
/// Properties the file omits fall back through
/// [Theme::default_property] like any other theme.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomTheme {
    /// The display name of the theme.
    name: String,
    /// The background color of the surface hosting the bar.
    window_background: Color,
    /// The separator color.
    separator: Color,
    /// Per-widget color tables.
    #[serde(default)]
    styles: IndexMap<String, IndexMap<String, Color>>,
}

impl CustomTheme {
    /// Load a theme from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::file_not_found(path));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|details| ThemeError::parse_error(path, details))
    }

    /// Parse a theme from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|err| err.to_string())
    }
}

impl Theme for CustomTheme {
    fn of(&self, id: WidgetId) -> Option<Style> {
        if id.namespace() != "crumbbar-widgets" {
            return None;
        }

        self.styles.get(id.id()).map(|colors| {
            let mut style = Style::new();
            for (key, color) in colors {
                style.set_color(key.clone(), *color);
            }
            style
        })
    }

    fn window_background(&self) -> Color {
        self.window_background
    }

    fn separator_color(&self) -> Color {
        self.separator
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties;

    const MIDNIGHT: &str = r##"
        name = "midnight"
        window_background = "#101014"
        separator = "#55556a"

        [styles.BreadcrumbItem]
        color_hovered = "#26263a"
        color_text = "#d8d8e8"
    "##;

    #[test]
    fn test_from_toml() {
        let theme = CustomTheme::from_toml(MIDNIGHT).unwrap();

        assert_eq!(theme.name(), "midnight");
        assert_eq!(theme.window_background(), Color::from_hex("#101014").unwrap());

        let style = theme
            .of(WidgetId::new("crumbbar-widgets", "BreadcrumbItem"))
            .unwrap();
        assert_eq!(
            style.get_color(properties::COLOR_HOVERED),
            Some(Color::from_hex("#26263a").unwrap())
        );
    }

    #[test]
    fn test_missing_widget_falls_back() {
        let theme = CustomTheme::from_toml(MIDNIGHT).unwrap();
        let id = WidgetId::new("crumbbar-widgets", "FolderPopup");

        assert!(theme.of(id.clone()).is_none());
        assert!(theme.get_property(id, properties::COLOR_TEXT).is_some());
    }

    #[test]
    fn test_invalid_color_rejected() {
        let toml = r##"
            name = "broken"
            window_background = "#nothex"
            separator = "#55556a"
        "##;
        assert!(CustomTheme::from_toml(toml).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = CustomTheme::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ThemeError::ThemeFileNotFound { .. }));
    }
}
