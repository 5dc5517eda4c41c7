//! # Theme System
//!
//! The [Theme] trait and the built-in theme implementations.
//!
//! A theme maps [WidgetId]s to [Style]s. The widgets styled by this crate
//! are `crumbbar-widgets:BreadcrumbItem` (plain crumbs),
//! `crumbbar-widgets:CurrentCrumb` (the terminal crumb, drawn highlighted)
//! and `crumbbar-widgets:FolderPopup` (the folder selection menu).
//!
//! ## Usage
//!
//! ```rust
//! use crumbbar_theme::id::WidgetId;
//! use crumbbar_theme::properties;
//! use crumbbar_theme::theme::{light::LightTheme, Theme};
//!
//! let theme = LightTheme::new();
//! let hovered = theme
//!     .get_property(
//!         WidgetId::new("crumbbar-widgets", "BreadcrumbItem"),
//!         properties::COLOR_HOVERED,
//!     )
//!     .unwrap();
//! ```

use crate::color::Color;
use crate::id::WidgetId;
use crate::properties;
use crate::style::Style;

/// Themes loaded from TOML files.
pub mod custom;
/// The built-in dark theme.
pub mod dark;
/// The built-in light theme.
pub mod light;

/// Base trait for all themes.
///
/// Implementors provide per-widget [Style]s through [Theme::of]; property
/// lookups fall back to [Theme::default_property] so a sparse theme still
/// renders sensibly.
pub trait Theme {
    /// Return the [Style] of the given widget, or [None] if the theme does
    /// not style it.
    fn of(&self, id: WidgetId) -> Option<Style>;

    /// Get a color property for a widget, falling back to defaults.
    /// This is the recommended access path.
    fn get_property(&self, id: WidgetId, property: &str) -> Option<Color> {
        self.of(id)
            .and_then(|style| style.get_color(property))
            .or_else(|| self.default_property(property))
    }

    /// Default property values for widgets the theme does not style.
    fn default_property(&self, property: &str) -> Option<Color> {
        match property {
            properties::COLOR_TEXT => Some(Color::BLACK),
            properties::COLOR_BACKGROUND => Some(Color::WHITE),
            properties::COLOR_BORDER => Some(Color::from_rgb8(200, 200, 200)),
            properties::COLOR_IDLE => Some(Color::TRANSPARENT),
            properties::COLOR_HOVERED => Some(Color::from_rgb8(240, 240, 240)),
            properties::COLOR_PRESSED => Some(Color::from_rgb8(224, 224, 224)),
            properties::COLOR_DISABLED => Some(Color::from_rgb8(150, 150, 150)),
            _ => None,
        }
    }

    /// The background color of the surface hosting the bar.
    fn window_background(&self) -> Color;

    /// The color of the separators drawn between items.
    fn separator_color(&self) -> Color;

    /// The display name of this theme.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{dark::DarkTheme, light::LightTheme};

    fn item_id() -> WidgetId {
        WidgetId::new("crumbbar-widgets", "BreadcrumbItem")
    }

    #[test]
    fn test_builtin_themes_style_the_bar_widgets() {
        let light = LightTheme::new();
        let dark = DarkTheme::new();
        for theme in [&light as &dyn Theme, &dark] {
            for widget in ["BreadcrumbItem", "CurrentCrumb", "FolderPopup"] {
                let id = WidgetId::new("crumbbar-widgets", widget);
                assert!(theme.of(id).is_some(), "{} misses {widget}", theme.name());
            }
        }
    }

    #[test]
    fn test_unknown_widget_falls_back_to_defaults() {
        let theme = LightTheme::new();
        let id = WidgetId::new("some-crate", "Exotic");

        assert!(theme.of(id.clone()).is_none());
        assert_eq!(
            theme.get_property(id, properties::COLOR_TEXT),
            Some(Color::BLACK)
        );
    }

    #[test]
    fn test_unknown_property_is_none() {
        let theme = DarkTheme::new();
        assert!(theme.get_property(item_id(), "no_such_property").is_none());
    }
}
