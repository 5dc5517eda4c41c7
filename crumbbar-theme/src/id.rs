//! # Widget Identifiers
//!
//! A [WidgetId] uniquely identifies a widget *type* in the theming system
//! and associates it with its theme styles. The namespace is the crate
//! name, the id the widget type name, so third-party widgets cannot
//! collide with the built-in ones.

use std::fmt::{Debug, Display, Formatter};

/// An identifier for a widget type in the theming system.
///
/// ```rust
/// use crumbbar_theme::id::WidgetId;
///
/// let id = WidgetId::new("crumbbar-widgets", "BreadcrumbItem");
/// assert_eq!(id.namespace(), "crumbbar-widgets");
/// assert_eq!(id.id(), "BreadcrumbItem");
/// ```
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct WidgetId {
    namespace: String,
    id: String,
}

impl WidgetId {
    /// Create a new widget id from a namespace and widget type name.
    /// The namespace should be the crate name.
    pub fn new(namespace: impl ToString, id: impl ToString) -> Self {
        Self {
            namespace: namespace.to_string(),
            id: id.to_string(),
        }
    }

    /// Returns the namespace of the widget id.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the actual widget id.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Display for WidgetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.id)
    }
}
