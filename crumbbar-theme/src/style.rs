//! # Style System
//!
//! A [Style] is a string-keyed map of [StyleVal] values describing how one
//! widget type is drawn. Themes return a style per [crate::id::WidgetId];
//! consumers read the properties they understand and fall back for the
//! rest.

use indexmap::IndexMap;

use crate::color::Color;

/// A single style value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleVal {
    /// A color value.
    Color(Color),
    /// A floating point value, e.g. a border radius.
    Float(f32),
    /// An unsigned integer value, e.g. a border width.
    UInt(u32),
    /// A boolean value, e.g. bold text.
    Bool(bool),
    /// A string value.
    Str(String),
}

/// A map of style properties for one widget type.
///
/// ```rust
/// use crumbbar_theme::color::Color;
/// use crumbbar_theme::style::Style;
///
/// let mut style = Style::new();
/// style.set_color("color_idle", Color::from_rgb8(100, 150, 255));
/// assert!(style.has("color_idle"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    values: IndexMap<String, StyleVal>,
}

impl Style {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a style from key/value pairs.
    pub fn from_values(values: impl IntoIterator<Item = (String, StyleVal)>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Set a color property.
    pub fn set_color(&mut self, key: impl Into<String>, color: Color) {
        self.values.insert(key.into(), StyleVal::Color(color));
    }

    /// Set a boolean property.
    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.values.insert(key.into(), StyleVal::Bool(value));
    }

    /// Get a color property.
    pub fn get_color(&self, key: &str) -> Option<Color> {
        match self.values.get(key) {
            Some(StyleVal::Color(color)) => Some(*color),
            _ => None,
        }
    }

    /// Get a float property.
    pub fn get_float(&self, key: &str) -> Option<f32> {
        match self.values.get(key) {
            Some(StyleVal::Float(value)) => Some(*value),
            _ => None,
        }
    }

    /// Get a boolean property.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.values.get(key) {
            Some(StyleVal::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    /// Whether the style carries the given property.
    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut style = Style::new();
        style.set_color("color_idle", Color::BLACK);
        style.set_bool("bold", true);

        assert_eq!(style.get_color("color_idle"), Some(Color::BLACK));
        assert_eq!(style.get_bool("bold"), Some(true));
        assert!(style.get_color("missing").is_none());
    }

    #[test]
    fn test_type_mismatch_returns_none() {
        let mut style = Style::new();
        style.set_bool("color_idle", true);

        assert!(style.get_color("color_idle").is_none());
    }

    #[test]
    fn test_from_values() {
        let style = Style::from_values([
            ("color_idle".to_string(), StyleVal::Color(Color::WHITE)),
            ("width".to_string(), StyleVal::UInt(2)),
        ]);

        assert!(style.has("color_idle"));
        assert!(style.has("width"));
    }
}
