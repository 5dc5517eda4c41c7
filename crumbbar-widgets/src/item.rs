//! # Breadcrumb Item
//!
//! One clickable crumb in the address bar: a display item plus its
//! interaction state. Items are rebuilt from scratch whenever the bar's
//! path or configuration changes, so they never carry stale paths.

use crumbbar_core::display::DisplayItem;

/// The interaction state of a breadcrumb item.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ItemState {
    /// The item is idling (inactive).
    Idle,
    /// The cursor is hovering over the item.
    Hovered,
    /// The item is held down.
    Pressed,
    /// The item was just released. This is when activation fires.
    Released,
}

/// A single crumb in the breadcrumb address bar.
///
/// The terminal crumb represents the current folder: activating it opens
/// the folder selection popup instead of navigating. The ellipsis crumb is
/// inert.
#[derive(Debug, Clone)]
pub struct BreadcrumbItem {
    display: DisplayItem,
    state: ItemState,
}

impl BreadcrumbItem {
    /// Create an item from a display item.
    pub fn new(display: DisplayItem) -> Self {
        log::debug!(
            "BreadcrumbItem created: {} -> {}",
            display.label,
            display.full_path
        );
        Self {
            display,
            state: ItemState::Idle,
        }
    }

    /// The user-facing text of this crumb.
    pub fn label(&self) -> &str {
        &self.display.label
    }

    /// The path this crumb navigates to. Empty for the ellipsis.
    pub fn path(&self) -> &str {
        &self.display.full_path
    }

    /// Whether this crumb represents the current (deepest) folder.
    pub fn is_current(&self) -> bool {
        self.display.is_terminal
    }

    /// Whether this crumb is the ellipsis marker.
    pub fn is_ellipsis(&self) -> bool {
        self.display.is_ellipsis()
    }

    /// The underlying display item.
    pub fn display(&self) -> &DisplayItem {
        &self.display
    }

    /// The current interaction state.
    pub fn state(&self) -> ItemState {
        self.state
    }

    /// Set the interaction state. The host binding drives this from its
    /// pointer events.
    pub fn set_state(&mut self, state: ItemState) {
        self.state = state;
    }
}
