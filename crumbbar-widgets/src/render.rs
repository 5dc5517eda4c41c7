//! # Renderer Capability Seam
//!
//! The bar never draws anything itself. A host GUI toolkit implements
//! [BreadcrumbRenderer] — render a clickable segment, render the ellipsis,
//! render a separator, present the folder popup — and the bar hands it
//! fully resolved colors so the toolkit side stays a dumb painter.
//!
//! [TextRenderer] is the reference implementation: it renders the bar to a
//! plain string and is what the tests and the terminal demo drive.

use crumbbar_theme::color::Color;
use crumbbar_theme::id::WidgetId;
use crumbbar_theme::properties;
use crumbbar_theme::theme::Theme;

use crate::item::{BreadcrumbItem, ItemState};
use crate::popup::FolderPopup;

/// The resolved colors for drawing one crumb in its current state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemColors {
    /// Fill color behind the label.
    pub background: Color,
    /// Label text color.
    pub text: Color,
    /// Border color.
    pub border: Color,
    /// Whether the label is drawn bold.
    pub bold: bool,
}

/// Resolve the colors for a crumb from a theme.
///
/// The terminal crumb styles as `CurrentCrumb`, everything else as
/// `BreadcrumbItem`. Hover and press states override the resting
/// background. A theme without an explicit border falls back to a border
/// derived from the text color, so the outline stays visible on any
/// background.
pub fn item_colors(theme: &dyn Theme, item: &BreadcrumbItem) -> ItemColors {
    let widget = if item.is_current() {
        WidgetId::new("crumbbar-widgets", "CurrentCrumb")
    } else {
        WidgetId::new("crumbbar-widgets", "BreadcrumbItem")
    };

    let resting = if item.is_current() {
        properties::COLOR_BACKGROUND
    } else {
        properties::COLOR_IDLE
    };
    let background_key = match item.state() {
        ItemState::Hovered => properties::COLOR_HOVERED,
        ItemState::Pressed => properties::COLOR_PRESSED,
        _ => resting,
    };

    let background = theme
        .get_property(widget.clone(), background_key)
        .unwrap_or(Color::TRANSPARENT);
    let text = theme
        .get_property(widget.clone(), properties::COLOR_TEXT)
        .unwrap_or(Color::BLACK);

    let explicit_border = theme
        .of(widget.clone())
        .and_then(|style| style.get_color(properties::COLOR_BORDER));
    let border = explicit_border.unwrap_or_else(|| text.contrast_border());

    let bold = theme
        .of(widget)
        .and_then(|style| style.get_bool("bold"))
        .unwrap_or(false);

    ItemColors {
        background,
        text,
        border,
        bold,
    }
}

/// The minimal drawing capability the bar needs from a host toolkit.
pub trait BreadcrumbRenderer {
    /// Draw one clickable crumb with the given resolved colors.
    fn render_segment(&mut self, item: &BreadcrumbItem, colors: &ItemColors);

    /// Draw the inert ellipsis crumb.
    fn render_ellipsis(&mut self, item: &BreadcrumbItem, colors: &ItemColors);

    /// Draw a separator between two crumbs.
    fn render_separator(&mut self, separator: &str, color: Color);

    /// Present the folder selection popup under the current crumb.
    fn present_popup(&mut self, popup: &FolderPopup);
}

/// A renderer that writes the bar into a plain string.
///
/// Crumbs render as `[label]`, the current crumb as `[[label]]` and the
/// ellipsis bare. Popups render one line per entry.
#[derive(Debug, Default)]
pub struct TextRenderer {
    line: String,
    popup_lines: Vec<String>,
}

impl TextRenderer {
    /// Create an empty text renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered bar line.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// The rendered popup entries, one per line.
    pub fn popup_lines(&self) -> &[String] {
        &self.popup_lines
    }

    /// Clear all rendered output.
    pub fn clear(&mut self) {
        self.line.clear();
        self.popup_lines.clear();
    }
}

impl BreadcrumbRenderer for TextRenderer {
    fn render_segment(&mut self, item: &BreadcrumbItem, _colors: &ItemColors) {
        if item.is_current() {
            self.line.push_str(&format!("[[{}]]", item.label()));
        } else {
            self.line.push_str(&format!("[{}]", item.label()));
        }
    }

    fn render_ellipsis(&mut self, item: &BreadcrumbItem, _colors: &ItemColors) {
        self.line.push_str(item.label());
    }

    fn render_separator(&mut self, separator: &str, _color: Color) {
        self.line.push_str(separator);
    }

    fn present_popup(&mut self, popup: &FolderPopup) {
        self.popup_lines = popup
            .entries()
            .iter()
            .map(|entry| entry.name.clone())
            .collect();
    }
}
