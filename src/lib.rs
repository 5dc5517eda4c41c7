#![warn(missing_docs)]

//! Breadcrumb address bar widgets for file manager navigation.
//!
//! The crates are split into three layers:
//!
//! - [`core`]: the pure path model — segmentation, display windowing and
//!   bar configuration. No I/O, no toolkit types.
//! - [`theme`]: colors, the `Theme` trait, built-in light and dark themes
//!   and runtime theme management.
//! - [`widgets`]: the toolkit-agnostic widget models — the bar itself, the
//!   folder selection popup and the renderer capability seam that a host
//!   GUI toolkit binds to.

pub use crumbbar_core as core;
pub use crumbbar_theme as theme;
pub use crumbbar_widgets as widgets;

/// A "prelude" for users of the crumbbar crates.
///
/// Importing this module brings into scope the most common types needed
/// to embed a breadcrumb address bar in a host application.
///
/// ```rust
/// use crumbbar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::config::BarConfig;
    pub use crate::core::display::{window_segments, DisplayItem};
    pub use crate::core::path::{segment_path, Segment};

    pub use crate::theme::color::Color;
    pub use crate::theme::manager::{ThemeManager, ThemeVariant};
    pub use crate::theme::theme::{dark::DarkTheme, light::LightTheme, Theme};

    pub use crate::widgets::bar::{Activation, BreadcrumbBar};
    pub use crate::widgets::item::{BreadcrumbItem, ItemState};
    pub use crate::widgets::popup::FolderPopup;
    pub use crate::widgets::render::{BreadcrumbRenderer, TextRenderer};
}
