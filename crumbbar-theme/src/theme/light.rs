//! The built-in light theme.

use crate::color::Color;
use crate::id::WidgetId;
use crate::properties;
use crate::style::{Style, StyleVal};
use crate::theme::Theme;

/// A clean light theme with a blue accent on the current crumb.
///
/// Plain crumbs render flat on the window background; the terminal crumb
/// is highlighted with the accent color and bold text.
#[derive(Debug, Clone, Default)]
pub struct LightTheme;

impl LightTheme {
    /// Create the light theme.
    pub fn new() -> Self {
        Self
    }
}

impl Theme for LightTheme {
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
                        StyleVal::Color(Color::from_rgb8(0xf0, 0xf0, 0xf0)),
                    ),
                    (
                        properties::COLOR_PRESSED.to_string(),
                        StyleVal::Color(Color::from_rgb8(0xe0, 0xe0, 0xe0)),
                    ),
                    (
                        properties::COLOR_TEXT.to_string(),
                        StyleVal::Color(Color::from_rgb8(0x33, 0x33, 0x33)),
                    ),
                    (
                        properties::COLOR_FOCUSED.to_string(),
                        StyleVal::Color(Color::from_rgb8(0x00, 0x78, 0xd4)),
                    ),
                ])),
                "CurrentCrumb" => Some(Style::from_values([
                    (
                        properties::COLOR_BACKGROUND.to_string(),
                        StyleVal::Color(Color::from_rgb8(0x00, 0x78, 0xd4)),
                    ),
                    (
                        properties::COLOR_TEXT.to_string(),
                        StyleVal::Color(Color::WHITE),
                    ),
                    (
                        properties::COLOR_BORDER.to_string(),
                        StyleVal::Color(Color::from_rgb8(0x00, 0x78, 0xd4)),
                    ),
                    (
                        properties::COLOR_HOVERED.to_string(),
                        StyleVal::Color(Color::from_rgb8(0x10, 0x6e, 0xbe)),
                    ),
                    (
                        properties::COLOR_PRESSED.to_string(),
                        StyleVal::Color(Color::from_rgb8(0x00, 0x5a, 0x9e)),
                    ),
                    ("bold".to_string(), StyleVal::Bool(true)),
                ])),
                "FolderPopup" => Some(Style::from_values([
                    (
                        properties::COLOR_BACKGROUND.to_string(),
                        StyleVal::Color(Color::WHITE),
                    ),
                    (
                        properties::COLOR_TEXT.to_string(),
                        StyleVal::Color(Color::from_rgb8(0x33, 0x33, 0x33)),
                    ),
                    (
                        properties::COLOR_HOVERED.to_string(),
                        StyleVal::Color(Color::from_rgb8(0xf0, 0xf0, 0xf0)),
                    ),
                    (
                        properties::COLOR_DISABLED.to_string(),
                        StyleVal::Color(Color::from_rgb8(0x99, 0x99, 0x99)),
                    ),
                ])),
                _ => None,
            },
            _ => None,
        }
    }

    fn window_background(&self) -> Color {
        Color::from_rgb8(0xfa, 0xfa, 0xfa)
    }

    fn separator_color(&self) -> Color {
        Color::from_rgb8(0xcc, 0xcc, 0xcc)
    }

    fn name(&self) -> &str {
        "light"
    }
}
