//! Style property keys understood by the built-in themes.
//!
//! Themes store [crate::style::Style] maps keyed by these strings.
//! A theme may omit any of them; consumers fall back through
//! [crate::theme::Theme::default_property].

/// Background color of an idle (inactive) item.
pub const COLOR_IDLE: &str = "color_idle";
/// Background color of a hovered item.
pub const COLOR_HOVERED: &str = "color_hovered";
/// Background color of a pressed item.
pub const COLOR_PRESSED: &str = "color_pressed";
/// Text color.
pub const COLOR_TEXT: &str = "color_text";
/// Border color.
pub const COLOR_BORDER: &str = "color_border";
/// Border color of a keyboard-focused item.
pub const COLOR_FOCUSED: &str = "color_focused";
/// Background color of a non-interactive surface.
pub const COLOR_BACKGROUND: &str = "color_background";
/// Text color of a disabled entry.
pub const COLOR_DISABLED: &str = "color_disabled";
