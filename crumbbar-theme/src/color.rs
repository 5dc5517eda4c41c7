//! # Colors
//!
//! An RGBA color type with hex-string parsing and serialization. Colors
//! serialize as `#rrggbb` (or `#rrggbbaa` when not fully opaque) so theme
//! files stay human-editable.

use std::fmt;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ThemeError, ThemeResult};

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; 255 is fully opaque.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::from_rgb8(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Color = Color::from_rgb8(255, 255, 255);
    /// Fully transparent.
    pub const TRANSPARENT: Color = Color::from_rgba8(0, 0, 0, 0);

    /// Create an opaque color from RGB channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from RGBA channels.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a color from a `#rrggbb` or `#rrggbbaa` hex string.
    /// The leading `#` is optional.
    pub fn from_hex(hex: &str) -> ThemeResult<Self> {
        let digits = hex.trim_start_matches('#');
        let invalid = || ThemeError::invalid_color(hex);

        match digits.len() {
            6 | 8 => {
                let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| invalid())?;
                let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| invalid())?;
                let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| invalid())?;
                let a = if digits.len() == 8 {
                    u8::from_str_radix(&digits[6..8], 16).map_err(|_| invalid())?
                } else {
                    255
                };
                Ok(Self { r, g, b, a })
            },
            _ => Err(invalid()),
        }
    }

    /// Format as a hex string: `#rrggbb`, or `#rrggbbaa` when translucent.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Mean channel brightness in the 0–255 range.
    pub fn brightness(self) -> f32 {
        (self.r as f32 + self.g as f32 + self.b as f32) / 3.0
    }

    /// A border color that stays visible next to text of this color.
    ///
    /// Bright text (brightness above 200) gets a dark gray border, medium
    /// text a mid gray and dark text a light gray. Themes that carry an
    /// explicit border property take precedence over this rule; see
    /// [crate::manager::ThemeManager::border_color].
    pub fn contrast_border(self) -> Color {
        let brightness = self.brightness();
        if brightness > 200.0 {
            Color::from_rgb8(0x66, 0x66, 0x66)
        } else if brightness > 100.0 {
            Color::from_rgb8(0x99, 0x99, 0x99)
        } else {
            Color::from_rgb8(0xcc, 0xcc, 0xcc)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        Color::from_hex(&hex).map_err(D::Error::custom)
    }
}
