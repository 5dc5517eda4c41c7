//! The built-in dark theme.

use crate::color::Color;
use crate::id::WidgetId;
use crate::properties;
use crate::style::{Style, StyleVal};
use crate::theme::Theme;

/// A high-contrast dark theme.
#[derive(Debug, Clone, Default)]
pub struct DarkTheme;

impl DarkTheme {
    /// Create the dark theme.
    pub fn new() -> Self {
        Self
    }
}

impl Theme for DarkTheme {
    fn of(&self, id: WidgetId) -> Option<Style> {
        match id.namespace() {
            "crumbbar-widgets" => match id.id() {
                "BreadcrumbItem" => Some(Style::from_values([
                    (
                        properties::COLOR_IDLE.to_string(),
                        StyleVal::Color(Color::TRANSPARENT),
                    ),
                    (
                        properties::COLOR_HOVERED.to_string(),
                        StyleVal::Color(Color::from_rgb8(0x3a, 0x3a, 0x3a)),
                    ),
                    (
                        properties::COLOR_PRESSED.to_string(),
                        StyleVal::Color(Color::from_rgb8(0x2a, 0x2a, 0x2a)),
                    ),
                    (
                        properties::COLOR_TEXT.to_string(),
                        StyleVal::Color(Color::from_rgb8(0xe0, 0xe0, 0xe0)),
                    ),
                    (
                        properties::COLOR_FOCUSED.to_string(),
                        StyleVal::Color(Color::from_rgb8(0x4d, 0xa3, 0xff)),
                    ),
                ])),
                "CurrentCrumb" => Some(Style::from_values([
                    (
                        properties::COLOR_BACKGROUND.to_string(),
                        StyleVal::Color(Color::from_rgb8(0x1f, 0x6f, 0xeb)),
                    ),
                    (
                        properties::COLOR_TEXT.to_string(),
                        StyleVal::Color(Color::WHITE),
                    ),
                    (
                        properties::COLOR_BORDER.to_string(),
                        StyleVal::Color(Color::from_rgb8(0x1f, 0x6f, 0xeb)),
                    ),
                    (
                        properties::COLOR_HOVERED.to_string(),
                        StyleVal::Color(Color::from_rgb8(0x38, 0x8b, 0xfd)),
                    ),
                    (
                        properties::COLOR_PRESSED.to_string(),
                        StyleVal::Color(Color::from_rgb8(0x11, 0x58, 0xc7)),
                    ),
                    ("bold".to_string(), StyleVal::Bool(true)),
                ])),
                "FolderPopup" => Some(Style::from_values([
                    (
                        properties::COLOR_BACKGROUND.to_string(),
                        StyleVal::Color(Color::from_rgb8(0x2b, 0x2b, 0x2b)),
                    ),
                    (
                        properties::COLOR_TEXT.to_string(),
                        StyleVal::Color(Color::from_rgb8(0xe0, 0xe0, 0xe0)),
                    ),
                    (
                        properties::COLOR_HOVERED.to_string(),
                        StyleVal::Color(Color::from_rgb8(0x3a, 0x3a, 0x3a)),
                    ),
                    (
                        properties::COLOR_DISABLED.to_string(),
                        StyleVal::Color(Color::from_rgb8(0x77, 0x77, 0x77)),
                    ),
                ])),
                _ => None,
            },
            _ => None,
        }
    }

    fn default_property(&self, property: &str) -> Option<Color> {
        // Dark surfaces need inverted fallbacks.
        match property {
            properties::COLOR_TEXT => Some(Color::from_rgb8(0xe0, 0xe0, 0xe0)),
            properties::COLOR_BACKGROUND => Some(Color::from_rgb8(0x1e, 0x1e, 0x1e)),
            properties::COLOR_BORDER => Some(Color::from_rgb8(0x55, 0x55, 0x55)),
            properties::COLOR_IDLE => Some(Color::TRANSPARENT),
            properties::COLOR_HOVERED => Some(Color::from_rgb8(0x3a, 0x3a, 0x3a)),
            properties::COLOR_PRESSED => Some(Color::from_rgb8(0x2a, 0x2a, 0x2a)),
            properties::COLOR_DISABLED => Some(Color::from_rgb8(0x77, 0x77, 0x77)),
            _ => None,
        }
    }

    fn window_background(&self) -> Color {
        Color::from_rgb8(0x1e, 0x1e, 0x1e)
    }

    fn separator_color(&self) -> Color {
        Color::from_rgb8(0x88, 0x88, 0x88)
    }

    fn name(&self) -> &str {
        "dark"
    }
}
