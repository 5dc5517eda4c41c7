//! # Display Windowing
//!
//! Projects a [Segment] sequence onto the items actually shown in the bar.
//! When the segment count exceeds the configured maximum, the display
//! collapses to a fixed window of four items: the first segment, an
//! ellipsis marker and the last two segments. The window width does not
//! scale with the configured maximum.

use crate::path::Segment;

/// The label shown on the ellipsis marker.
pub const ELLIPSIS_LABEL: &str = "...";

/// A segment (or the ellipsis marker) as actually rendered.
///
/// At most one item in a produced sequence is terminal, and when present
/// it is always the last item. The ellipsis marker carries an empty
/// `full_path` and is never a navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// The user-facing text for this item.
    pub label: String,
    /// The cumulative path this item navigates to. Empty for the ellipsis.
    pub full_path: String,
    /// Whether this item represents the deepest (current) folder.
    pub is_terminal: bool,
}

impl DisplayItem {
    /// Create a display item from a segment.
    pub fn from_segment(segment: &Segment, is_terminal: bool) -> Self {
        Self {
            label: segment.label.clone(),
            full_path: segment.full_path.clone(),
            is_terminal,
        }
    }

    /// The ellipsis marker inserted when the segment count overflows.
    pub fn ellipsis() -> Self {
        Self {
            label: ELLIPSIS_LABEL.to_string(),
            full_path: String::new(),
            is_terminal: false,
        }
    }

    /// Whether this item is the ellipsis marker.
    pub fn is_ellipsis(&self) -> bool {
        self.full_path.is_empty() && self.label == ELLIPSIS_LABEL
    }
}

/// Window a segment sequence for display.
///
/// With `segments.len() <= max_items` every segment is returned in order,
/// the last one terminal. On overflow the result is always exactly four
/// items: first segment, ellipsis, second-to-last, last. An empty input
/// yields an empty output.
///
/// `max_items` must be positive; validating that is the caller's job.
///
/// ```rust
/// use crumbbar_core::display::window_segments;
/// use crumbbar_core::path::{segment_path, CustomLabels};
///
/// let segments = segment_path("/a/b/c/d/e/f", &CustomLabels::new());
/// let items = window_segments(&segments, 5);
///
/// assert_eq!(items.len(), 4);
/// assert!(items[1].is_ellipsis());
/// ```
pub fn window_segments(segments: &[Segment], max_items: usize) -> Vec<DisplayItem> {
    if segments.is_empty() {
        return Vec::new();
    }

    let last = segments.len() - 1;

    if segments.len() <= max_items {
        return segments
            .iter()
            .enumerate()
            .map(|(i, segment)| DisplayItem::from_segment(segment, i == last))
            .collect();
    }

    // Overflow collapses to first + "..." + last two, independent of how
    // far max_items sits below the segment count.
    vec![
        DisplayItem::from_segment(&segments[0], false),
        DisplayItem::ellipsis(),
        DisplayItem::from_segment(&segments[last - 1], false),
        DisplayItem::from_segment(&segments[last], true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{segment_path, CustomLabels};

    fn segments_for(path: &str) -> Vec<Segment> {
        segment_path(path, &CustomLabels::new())
    }

    #[test]
    fn test_identity_below_max() {
        let segments = segments_for("/home/user/documents");
        let items = window_segments(&segments, 5);

        assert_eq!(items.len(), segments.len());
        for (item, segment) in items.iter().zip(&segments) {
            assert_eq!(item.label, segment.label);
            assert_eq!(item.full_path, segment.full_path);
        }
        assert!(items.last().unwrap().is_terminal);
        assert_eq!(items.iter().filter(|i| i.is_terminal).count(), 1);
    }

    #[test]
    fn test_identity_at_exact_max() {
        let segments = segments_for("/a/b/c/d");
        assert_eq!(segments.len(), 5);

        let items = window_segments(&segments, 5);
        assert_eq!(items.len(), 5);
    }

    #[test]
    fn test_overflow_shape() {
        let segments = segments_for("/a/b/c/d/e/f");
        assert_eq!(segments.len(), 7);

        let items = window_segments(&segments, 5);

        assert_eq!(items.len(), 4);
        assert_eq!(items[0].full_path, "/");
        assert!(items[1].is_ellipsis());
        assert!(!items[1].is_terminal);
        assert_eq!(items[2].full_path, "/a/b/c/d/e");
        assert!(!items[2].is_terminal);
        assert_eq!(items[3].full_path, "/a/b/c/d/e/f");
        assert!(items[3].is_terminal);
        assert_eq!(items.iter().filter(|i| i.is_terminal).count(), 1);
    }

    #[test]
    fn test_overflow_width_fixed_regardless_of_max() {
        let segments = segments_for("/a/b/c/d/e/f/g/h/i/j");

        for max_items in 2..segments.len() {
            let items = window_segments(&segments, max_items);
            assert_eq!(items.len(), 4, "max_items = {max_items}");
            assert!(items[1].is_ellipsis());
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(window_segments(&[], 5).is_empty());
    }

    #[test]
    fn test_single_segment_is_terminal() {
        let segments = segments_for("/");
        let items = window_segments(&segments, 5);

        assert_eq!(items.len(), 1);
        assert!(items[0].is_terminal);
    }

    #[test]
    fn test_ellipsis_not_navigable() {
        let ellipsis = DisplayItem::ellipsis();

        assert_eq!(ellipsis.label, ELLIPSIS_LABEL);
        assert!(ellipsis.full_path.is_empty());
        assert!(!ellipsis.is_terminal);
    }
}
