#![warn(missing_docs)]

//! # Crumbbar Core
//!
//! The pure path model behind the crumbbar breadcrumb address bar.
//! This crate has no I/O and no toolkit types: everything in here is a
//! total function over strings and configuration values, recomputed from
//! scratch on every call.
//!
//! ## Overview
//!
//! - **[path::segment_path]**: turn a raw path string into an ordered
//!   root-to-leaf sequence of [path::Segment]s.
//! - **[display::window_segments]**: project a segment sequence onto the
//!   items actually shown, collapsing overflow behind an ellipsis marker.
//! - **[config::BarConfig]**: the bar configuration (maximum item count,
//!   separator, sizing, custom labels), loadable from TOML files and
//!   environment variables.
//!
//! ## Quick Start
//!
//! ```rust
//! use crumbbar_core::config::BarConfig;
//! use crumbbar_core::display::window_segments;
//! use crumbbar_core::path::segment_path;
//!
//! let config = BarConfig::new();
//! let segments = segment_path("/home/user/documents", config.custom_labels());
//! let items = window_segments(&segments, config.max_items());
//!
//! assert_eq!(items.len(), 4);
//! assert!(items.last().unwrap().is_terminal);
//! ```

/// Contains the [config::BarConfig] struct for bar configuration.
pub mod config;
/// Contains the [display::DisplayItem] struct and windowing logic.
pub mod display;
/// Contains the [path::Segment] struct and path segmentation.
pub mod path;
