//! # Breadcrumb Address Bar
//!
//! The main widget model: a horizontal row of clickable crumbs
//! representing the current filesystem path, with ellipsis collapse when
//! the path gets deep and a folder selection popup on the current crumb.
//!
//! The bar owns the current path and configuration, recomputes its items
//! from scratch on every change and reports navigation through callbacks.
//! All drawing goes through the [BreadcrumbRenderer] seam.

use std::sync::Arc;

use crumbbar_core::config::BarConfig;
use crumbbar_core::display::window_segments;
use crumbbar_core::path::{segment_path, CustomLabels};
use crumbbar_theme::manager::ThemeManager;
use crumbbar_theme::theme::Theme;

use crate::item::BreadcrumbItem;
use crate::popup::FolderPopup;
use crate::render::{item_colors, BreadcrumbRenderer};

/// Callback invoked with a path string.
pub type PathCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// What activating a crumb resulted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The bar navigated to the given path.
    Navigated(String),
    /// The current-folder crumb asked for the folder popup.
    PopupRequested(String),
}

/// The breadcrumb address bar widget model.
///
/// ```rust
/// use crumbbar_widgets::bar::{Activation, BreadcrumbBar};
///
/// let mut bar = BreadcrumbBar::new();
/// bar.set_path("/home/user/documents");
/// assert_eq!(bar.items().len(), 4);
///
/// // Clicking an ancestor crumb navigates there.
/// assert_eq!(
///     bar.click(1),
///     Some(Activation::Navigated("/home".to_string()))
/// );
/// assert_eq!(bar.path(), "/home");
/// ```
pub struct BreadcrumbBar {
    current_path: String,
    config: BarConfig,
    items: Vec<BreadcrumbItem>,
    on_path_changed: Option<PathCallback>,
    on_folder_selected: Option<PathCallback>,
}

impl BreadcrumbBar {
    /// Create an empty bar with the default configuration.
    pub fn new() -> Self {
        Self::with_config(BarConfig::new())
    }

    /// Create an empty bar with the given configuration.
    pub fn with_config(config: BarConfig) -> Self {
        log::debug!("BreadcrumbBar initialized");
        Self {
            current_path: String::new(),
            config,
            items: Vec::new(),
            on_path_changed: None,
            on_folder_selected: None,
        }
    }

    /// Set the function to be called when the path changes.
    pub fn with_on_path_changed(mut self, callback: PathCallback) -> Self {
        self.on_path_changed = Some(callback);
        self
    }

    /// Set the function to be called when a folder is picked from the popup.
    pub fn with_on_folder_selected(mut self, callback: PathCallback) -> Self {
        self.on_folder_selected = Some(callback);
        self
    }

    /// The current path.
    pub fn path(&self) -> &str {
        &self.current_path
    }

    /// The bar configuration.
    pub fn config(&self) -> &BarConfig {
        &self.config
    }

    /// The items currently displayed, root first.
    pub fn items(&self) -> &[BreadcrumbItem] {
        &self.items
    }

    /// Mutable access to the displayed items, for the host binding to
    /// drive hover and press states.
    pub fn items_mut(&mut self) -> &mut [BreadcrumbItem] {
        &mut self.items
    }

    /// Set the current path and rebuild the display.
    ///
    /// Setting the already-current path is a no-op and does not fire the
    /// path-changed callback.
    pub fn set_path(&mut self, path: &str) {
        if path == self.current_path {
            return;
        }

        log::info!("Setting path: {path}");
        self.current_path = path.to_string();
        self.rebuild();

        if let Some(callback) = self.on_path_changed.clone() {
            callback(&self.current_path);
        }
    }

    /// Set the maximum number of displayed items.
    /// Non-positive and unchanged values are ignored.
    pub fn set_max_items(&mut self, count: usize) {
        if count > 0 && count != self.config.max_items() {
            self.config.set_max_items(count);
            self.rebuild();
        }
    }

    /// Set the crumb button height in pixels.
    /// Non-positive and unchanged values are ignored.
    pub fn set_button_height(&mut self, height: u32) {
        if height > 0 && height != self.config.button_height() {
            self.config.set_button_height(height);
        }
    }

    /// Set the font size in points.
    /// Non-positive and unchanged values are ignored.
    pub fn set_font_size(&mut self, size: u32) {
        if size > 0 && size != self.config.font_size() {
            self.config.set_font_size(size);
        }
    }

    /// Set the separator drawn between crumbs.
    pub fn set_separator(&mut self, separator: &str) {
        if separator != self.config.separator() {
            self.config.set_separator(separator.to_string());
        }
    }

    /// Replace the custom display labels and rebuild the display.
    pub fn set_custom_labels(&mut self, labels: CustomLabels) {
        self.config.set_custom_labels(labels);
        self.rebuild();
    }

    /// Activate the crumb at `index` as a pointer click.
    ///
    /// An ancestor crumb navigates to its path; the current-folder crumb
    /// requests the folder popup; the ellipsis does nothing.
    pub fn click(&mut self, index: usize) -> Option<Activation> {
        let item = self.items.get(index)?;
        let path = item.path().to_string();
        let is_current = item.is_current();

        log::debug!(
            "Item clicked: path='{path}', is_current={is_current}, current_path='{}'",
            self.current_path
        );

        if path.is_empty() {
            return None;
        }

        if is_current {
            log::debug!("Requesting folder popup for current path");
            Some(Activation::PopupRequested(path))
        } else {
            log::debug!("Navigating to path: {path}");
            self.set_path(&path);
            Some(Activation::Navigated(path))
        }
    }

    /// Activate the crumb at `index` from the keyboard (Enter/Space in the
    /// host binding). Same behavior as [BreadcrumbBar::click].
    pub fn key_activate(&mut self, index: usize) -> Option<Activation> {
        self.click(index)
    }

    /// Build the folder popup for a path, typically the one carried by
    /// [Activation::PopupRequested].
    pub fn open_popup(&self, path: &str) -> FolderPopup {
        FolderPopup::for_path(path)
    }

    /// Navigate to a folder picked from the popup.
    ///
    /// Fires the folder-selected callback in addition to the path-changed
    /// callback. Picking the current path does nothing.
    pub fn select_folder(&mut self, path: &str) {
        if path.is_empty() || path == self.current_path {
            return;
        }

        self.set_path(path);
        if let Some(callback) = self.on_folder_selected.clone() {
            callback(path);
        }
        log::info!("Folder selected from popup: {path}");
    }

    /// Clear cached theme properties after a theme switch so the next
    /// render picks up the new colors.
    pub fn refresh_theme(&self, manager: &ThemeManager) {
        log::info!("Refreshing theme for breadcrumb items");
        manager.clear_cache();
    }

    /// Draw the bar through a renderer, resolving all colors from `theme`.
    pub fn render(&self, renderer: &mut dyn BreadcrumbRenderer, theme: &dyn Theme) {
        let separator = self.config.separator();

        for (index, item) in self.items.iter().enumerate() {
            let colors = item_colors(theme, item);
            if item.is_ellipsis() {
                renderer.render_ellipsis(item, &colors);
            } else {
                renderer.render_segment(item, &colors);
            }

            if index + 1 < self.items.len() && !separator.is_empty() {
                renderer.render_separator(separator, theme.separator_color());
            }
        }
    }

    /// The recommended size of the bar in pixels.
    pub fn size_hint(&self) -> (u32, u32) {
        (400, self.config.button_height() + 8)
    }

    /// Recompute the items from the current path and configuration.
    fn rebuild(&mut self) {
        if self.current_path.is_empty() {
            self.items.clear();
            return;
        }

        let segments = segment_path(&self.current_path, self.config.custom_labels());
        let display = window_segments(&segments, self.config.max_items());
        self.items = display.into_iter().map(BreadcrumbItem::new).collect();
    }
}

impl Default for BreadcrumbBar {
    fn default() -> Self {
        Self::new()
    }
}
