#![warn(missing_docs)]

//! Widget models for the crumbbar breadcrumb address bar.
//!
//! Everything in this crate is toolkit-agnostic: the widgets model state,
//! interaction and styling decisions, and hand the actual drawing to a
//! [render::BreadcrumbRenderer] implementation provided by the host GUI
//! toolkit.

/// Contains the [bar::BreadcrumbBar] widget model.
pub mod bar;

/// Contains the [item::BreadcrumbItem] widget model.
pub mod item;

/// Contains directory listing for the folder popup.
pub mod listing;

/// Contains the [popup::FolderPopup] widget model.
pub mod popup;

/// Contains the [render::BreadcrumbRenderer] capability trait.
pub mod render;
