//! # Theme Management
//!
//! Runtime theme switching with property caching. The manager owns the
//! current theme, keeps every registered variant available for switching
//! and memoizes property lookups until the theme changes.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::color::Color;
use crate::id::WidgetId;
use crate::properties;
use crate::theme::{dark::DarkTheme, light::LightTheme, Theme};

/// A theme variant that can be switched at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ThemeVariant {
    /// Light theme variant.
    Light,
    /// Dark theme variant.
    Dark,
    /// Custom theme variant with a name.
    Custom(String),
}

impl Default for ThemeVariant {
    fn default() -> Self {
        Self::Light
    }
}

/// A theme manager that supports runtime theme switching and caching.
///
/// ```rust
/// use crumbbar_theme::manager::{ThemeManager, ThemeVariant};
///
/// let mut manager = ThemeManager::new();
/// assert!(manager.switch_theme(&ThemeVariant::Dark));
/// assert_eq!(manager.current_variant(), &ThemeVariant::Dark);
/// ```
pub struct ThemeManager {
    current: Arc<dyn Theme + Send + Sync>,
    current_variant: ThemeVariant,
    available: HashMap<ThemeVariant, Arc<dyn Theme + Send + Sync>>,
    property_cache: RwLock<HashMap<(WidgetId, String), Option<Color>>>,
}

impl ThemeManager {
    /// Create a new theme manager with the default light theme.
    pub fn new() -> Self {
        Self::with_default_variant(ThemeVariant::Light)
    }

    /// Create a new theme manager starting on the given built-in variant.
    pub fn with_default_variant(variant: ThemeVariant) -> Self {
        let mut available: HashMap<ThemeVariant, Arc<dyn Theme + Send + Sync>> =
            HashMap::new();
        available.insert(ThemeVariant::Light, Arc::new(LightTheme::new()));
        available.insert(ThemeVariant::Dark, Arc::new(DarkTheme::new()));

        let current = available
            .get(&variant)
            .cloned()
            .unwrap_or_else(|| Arc::new(LightTheme::new()));

        Self {
            current,
            current_variant: variant,
            available,
            property_cache: RwLock::new(HashMap::new()),
        }
    }

    /// Register a theme under a variant, replacing any previous entry.
    pub fn add_theme(
        &mut self,
        variant: ThemeVariant,
        theme: Arc<dyn Theme + Send + Sync>,
    ) {
        self.available.insert(variant, theme);
    }

    /// Switch to a different theme variant.
    ///
    /// Returns `false` (and leaves the current theme in place) when the
    /// variant is unknown. Switching clears the property cache.
    pub fn switch_theme(&mut self, variant: &ThemeVariant) -> bool {
        match self.available.get(variant) {
            Some(theme) => {
                self.current = theme.clone();
                self.current_variant = variant.clone();
                self.clear_cache();
                log::info!("Theme changed to: {}", self.current.name());
                true
            },
            None => {
                log::warn!("Unknown theme variant: {variant:?}");
                false
            },
        }
    }

    /// The currently active theme variant.
    pub fn current_variant(&self) -> &ThemeVariant {
        &self.current_variant
    }

    /// All variants available for switching.
    pub fn available_variants(&self) -> Vec<ThemeVariant> {
        self.available.keys().cloned().collect()
    }

    /// The currently active theme.
    pub fn current_theme(&self) -> Arc<dyn Theme + Send + Sync> {
        self.current.clone()
    }

    /// Get a theme property with caching.
    ///
    /// Both hits and misses are cached; the cache empties on theme switch.
    pub fn get_property(&self, id: WidgetId, property: &str) -> Option<Color> {
        let cache_key = (id.clone(), property.to_string());

        if let Ok(cache) = self.property_cache.read() {
            if let Some(cached) = cache.get(&cache_key) {
                return *cached;
            }
        }

        let color = self.current.get_property(id, property);
        if let Ok(mut cache) = self.property_cache.write() {
            cache.insert(cache_key, color);
        }
        color
    }

    /// The separator color of the current theme.
    pub fn separator_color(&self) -> Color {
        self.current.separator_color()
    }

    /// The window background of the current theme.
    pub fn window_background(&self) -> Color {
        self.current.window_background()
    }

    /// The border color for a widget.
    ///
    /// An explicit `color_border` property on the widget wins; otherwise
    /// the border is derived from the widget's text color so it stays
    /// visible on any background (see [Color::contrast_border]).
    pub fn border_color(&self, id: WidgetId) -> Color {
        // Only an explicit style entry counts here; the generic default
        // border would shadow the contrast rule.
        let explicit = self
            .current
            .of(id.clone())
            .and_then(|style| style.get_color(properties::COLOR_BORDER));
        if let Some(border) = explicit {
            return border;
        }

        let text = self
            .get_property(id, properties::COLOR_TEXT)
            .unwrap_or(Color::BLACK);
        text.contrast_border()
    }

    /// Clear the property cache.
    pub fn clear_cache(&self) {
        if let Ok(mut cache) = self.property_cache.write() {
            cache.clear();
        }
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// A thread-safe theme manager that can be shared across threads.
pub type SharedThemeManager = Arc<RwLock<ThemeManager>>;

/// Create a new shared theme manager.
pub fn create_shared_theme_manager() -> SharedThemeManager {
    Arc::new(RwLock::new(ThemeManager::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;

    fn item_id() -> WidgetId {
        WidgetId::new("crumbbar-widgets", "BreadcrumbItem")
    }

    #[test]
    fn test_default_is_light() {
        let manager = ThemeManager::new();
        assert_eq!(manager.current_variant(), &ThemeVariant::Light);
        assert_eq!(manager.current_theme().name(), "light");
    }

    #[test]
    fn test_switch_theme() {
        let mut manager = ThemeManager::new();

        assert!(manager.switch_theme(&ThemeVariant::Dark));
        assert_eq!(manager.current_theme().name(), "dark");

        assert!(!manager.switch_theme(&ThemeVariant::Custom("nope".into())));
        assert_eq!(manager.current_theme().name(), "dark");
    }

    #[test]
    fn test_switch_invalidates_cache() {
        let mut manager = ThemeManager::new();

        let light_text = manager.get_property(item_id(), properties::COLOR_TEXT);
        manager.switch_theme(&ThemeVariant::Dark);
        let dark_text = manager.get_property(item_id(), properties::COLOR_TEXT);

        assert_ne!(light_text, dark_text);
    }

    #[test]
    fn test_cached_lookup_is_stable() {
        let manager = ThemeManager::new();

        let first = manager.get_property(item_id(), properties::COLOR_HOVERED);
        let second = manager.get_property(item_id(), properties::COLOR_HOVERED);

        assert_eq!(first, second);
    }

    #[test]
    fn test_border_prefers_theme_property() {
        let manager = ThemeManager::new();
        let current = WidgetId::new("crumbbar-widgets", "CurrentCrumb");

        // CurrentCrumb carries an explicit border in the light theme.
        assert_eq!(
            manager.border_color(current),
            Color::from_rgb8(0x00, 0x78, 0xd4)
        );
    }

    #[test]
    fn test_border_derived_from_text_color() {
        let manager = ThemeManager::new();

        // BreadcrumbItem has no border property; its dark text (#333333)
        // derives a light gray border.
        assert_eq!(
            manager.border_color(item_id()),
            Color::from_rgb8(0xcc, 0xcc, 0xcc)
        );
    }

    #[test]
    fn test_add_custom_theme() {
        struct Flat;
        impl Theme for Flat {
            fn of(&self, _id: WidgetId) -> Option<Style> {
                None
            }
            fn window_background(&self) -> Color {
                Color::WHITE
            }
            fn separator_color(&self) -> Color {
                Color::BLACK
            }
            fn name(&self) -> &str {
                "flat"
            }
        }

        let mut manager = ThemeManager::new();
        let variant = ThemeVariant::Custom("flat".into());
        manager.add_theme(variant.clone(), Arc::new(Flat));

        assert!(manager.switch_theme(&variant));
        assert_eq!(manager.current_theme().name(), "flat");
    }
}
