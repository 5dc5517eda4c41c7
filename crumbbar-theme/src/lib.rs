#![warn(missing_docs)]

//! # Crumbbar Theming System
//!
//! Themes and styling for the crumbbar breadcrumb address bar.
//!
//! ## Overview
//!
//! The theming system consists of:
//!
//! - **[theme::Theme]**: the trait all themes implement
//! - **[theme::light::LightTheme]** / **[theme::dark::DarkTheme]**: built-in themes
//! - **[theme::custom::CustomTheme]**: themes loaded from TOML files
//! - **[manager::ThemeManager]**: runtime theme switching with property caching
//! - **[config::ThemeConfig]**: theme selection from environment variables and files
//!
//! ## Quick Start
//!
//! ```rust
//! use crumbbar_theme::id::WidgetId;
//! use crumbbar_theme::properties;
//! use crumbbar_theme::theme::{dark::DarkTheme, Theme};
//!
//! let theme = DarkTheme::new();
//! let color = theme
//!     .get_property(
//!         WidgetId::new("crumbbar-widgets", "BreadcrumbItem"),
//!         properties::COLOR_HOVERED,
//!     )
//!     .unwrap();
//! ```
//!
//! ## Theme Selection
//!
//! ```bash
//! export CRUMBBAR_THEME=dark            # use the dark theme
//! export CRUMBBAR_THEME=file:my.toml    # load a theme from a TOML file
//! export CRUMBBAR_THEME_FALLBACK=light  # fallback if the primary fails
//! ```

/// Contains the [color::Color] struct.
pub mod color;
/// Contains the [config::ThemeConfig] struct for theme selection.
pub mod config;
/// Contains the [error::ThemeError] type.
pub mod error;
/// Contains the [id::WidgetId] struct.
pub mod id;
/// Contains theme management and runtime switching.
pub mod manager;
/// Contains the style property keys used by the built-in themes.
pub mod properties;
/// Contains styling structures.
pub mod style;
/// Contains the [theme::Theme] trait and built-in themes.
pub mod theme;
