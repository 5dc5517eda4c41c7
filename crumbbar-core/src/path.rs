//! # Path Segmentation
//!
//! Turns a raw path string into an ordered sequence of [Segment]s, one per
//! path component, root first. Both POSIX (`/`) and Windows (`X:\`)
//! notations are supported; the separator mode is decided once per call for
//! the whole path. Paths mixing both separators are not supported — the
//! split proceeds under whichever single mode was detected.
//!
//! Segmentation never fails: malformed input degrades to a best-effort
//! component split, and an empty input yields an empty sequence.

use indexmap::IndexMap;

/// Component names longer than this are truncated for display.
pub const MAX_LABEL_LEN: usize = 20;

/// How many characters of a truncated component name are kept.
pub const TRUNCATED_LABEL_KEEP: usize = 17;

/// Custom display labels, keyed by full path. Insertion order is preserved
/// so that configuration round-trips deterministically.
pub type CustomLabels = IndexMap<String, String>;

/// One path component plus the cumulative path up to and including it.
///
/// Segments are produced root-to-leaf and are immutable snapshots: setting
/// a new path on the bar recomputes the whole sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The user-facing text for this component, after custom-label lookup
    /// and truncation.
    pub label: String,
    /// The cumulative path up to and including this component, in the same
    /// notation family as the input.
    pub full_path: String,
}

impl Segment {
    /// Create a new segment from a label and its cumulative path.
    pub fn new(label: impl Into<String>, full_path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            full_path: full_path.into(),
        }
    }
}

/// Split a path string into an ordered root-to-leaf [Segment] sequence.
///
/// A leading `/` produces the root segment `("/", "/")`; a leading drive
/// prefix `X:\` produces `("X:\", "X:\")`. Everything after the root is
/// split on `\` if the remainder contains a backslash, otherwise on `/`.
/// Empty components are skipped.
///
/// Labels are resolved per component: an exact `labels` entry for the
/// component's cumulative path wins verbatim, otherwise names longer than
/// [MAX_LABEL_LEN] characters are truncated to [TRUNCATED_LABEL_KEEP]
/// characters plus `"..."`.
///
/// ```rust
/// use crumbbar_core::path::{segment_path, CustomLabels};
///
/// let segments = segment_path("/home/user", &CustomLabels::new());
/// assert_eq!(segments[0].full_path, "/");
/// assert_eq!(segments[2].full_path, "/home/user");
/// ```
pub fn segment_path(path: &str, labels: &CustomLabels) -> Vec<Segment> {
    let mut segments = Vec::new();

    if path.is_empty() {
        return segments;
    }

    let remainder = if let Some(rest) = path.strip_prefix('/') {
        segments.push(Segment::new("/", "/"));
        rest
    } else if let Some(root) = drive_prefix(path) {
        segments.push(Segment::new(root.clone(), root));
        &path[3..]
    } else {
        path
    };

    if remainder.is_empty() {
        return segments;
    }

    // Whole-path separator decision: any backslash in the remainder selects
    // Windows mode for every component.
    let separator = if remainder.contains('\\') { '\\' } else { '/' };

    let mut cumulative = segments
        .first()
        .map(|root| root.full_path.clone())
        .unwrap_or_default();

    for component in remainder.split(separator) {
        if component.is_empty() {
            continue;
        }

        cumulative = join_component(&cumulative, component, separator);
        let label = resolve_label(component, &cumulative, labels);
        segments.push(Segment::new(label, cumulative.clone()));
    }

    segments
}

/// Returns the drive root (`"X:\"`) if the path starts with one.
fn drive_prefix(path: &str) -> Option<String> {
    let bytes = path.as_bytes();
    if bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && bytes[2] == b'\\'
    {
        Some(path[..3].to_string())
    } else {
        None
    }
}

/// Join a component onto a cumulative path without doubling the separator.
///
/// An empty cumulative path (relative input) yields the component itself,
/// so every produced path stays a well-formed prefix of the input.
fn join_component(cumulative: &str, component: &str, separator: char) -> String {
    if cumulative.is_empty() {
        component.to_string()
    } else if cumulative.ends_with(separator) {
        format!("{cumulative}{component}")
    } else {
        format!("{cumulative}{separator}{component}")
    }
}

/// Resolve the display label for a single component.
fn resolve_label(component: &str, full_path: &str, labels: &CustomLabels) -> String {
    if let Some(custom) = labels.get(full_path) {
        return custom.clone();
    }

    if component.chars().count() > MAX_LABEL_LEN {
        let kept: String = component.chars().take(TRUNCATED_LABEL_KEEP).collect();
        return format!("{kept}...");
    }

    component.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(entries: &[(&str, &str)]) -> CustomLabels {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_posix_path() {
        let segments = segment_path("/home/user/documents", &CustomLabels::new());

        assert_eq!(
            segments,
            vec![
                Segment::new("/", "/"),
                Segment::new("home", "/home"),
                Segment::new("user", "/home/user"),
                Segment::new("documents", "/home/user/documents"),
            ]
        );
    }

    #[test]
    fn test_windows_path() {
        let segments = segment_path("C:\\Users\\User\\Documents", &CustomLabels::new());

        assert_eq!(
            segments,
            vec![
                Segment::new("C:\\", "C:\\"),
                Segment::new("Users", "C:\\Users"),
                Segment::new("User", "C:\\Users\\User"),
                Segment::new("Documents", "C:\\Users\\User\\Documents"),
            ]
        );
    }

    #[test]
    fn test_drive_prefix_any_letter() {
        let segments = segment_path("d:\\data", &CustomLabels::new());
        assert_eq!(segments[0], Segment::new("d:\\", "d:\\"));
        assert_eq!(segments[1], Segment::new("data", "d:\\data"));
    }

    #[test]
    fn test_empty_path() {
        assert!(segment_path("", &CustomLabels::new()).is_empty());
    }

    #[test]
    fn test_root_only() {
        assert_eq!(
            segment_path("/", &CustomLabels::new()),
            vec![Segment::new("/", "/")]
        );
    }

    #[test]
    fn test_relative_path() {
        let segments = segment_path("projects/crumbbar", &CustomLabels::new());

        assert_eq!(
            segments,
            vec![
                Segment::new("projects", "projects"),
                Segment::new("crumbbar", "projects/crumbbar"),
            ]
        );
    }

    #[test]
    fn test_consecutive_separators_skipped() {
        let segments = segment_path("/home//user/", &CustomLabels::new());

        assert_eq!(
            segments,
            vec![
                Segment::new("/", "/"),
                Segment::new("home", "/home"),
                Segment::new("user", "/home/user"),
            ]
        );
    }

    #[test]
    fn test_custom_label_precedence() {
        let labels = labels(&[("/home/user", "Home")]);
        let segments = segment_path("/home/user", &labels);

        assert_eq!(segments[2].label, "Home");
        assert_eq!(segments[2].full_path, "/home/user");
    }

    #[test]
    fn test_custom_label_not_truncated() {
        let long_label = "A".repeat(30);
        let labels = labels(&[("/x", long_label.as_str())]);
        let segments = segment_path("/x", &labels);

        assert_eq!(segments[1].label, long_label);
    }

    #[test]
    fn test_long_component_truncated() {
        let component = "b".repeat(25);
        let path = format!("/{component}");
        let segments = segment_path(&path, &CustomLabels::new());

        let label = &segments[1].label;
        assert_eq!(label.chars().count(), MAX_LABEL_LEN);
        assert!(label.ends_with("..."));
        assert_eq!(&label[..TRUNCATED_LABEL_KEEP], "b".repeat(17).as_str());
    }

    #[test]
    fn test_exactly_twenty_chars_untouched() {
        let component = "c".repeat(20);
        let path = format!("/{component}");
        let segments = segment_path(&path, &CustomLabels::new());

        assert_eq!(segments[1].label, component);
    }

    #[test]
    fn test_idempotence_on_last_full_path() {
        let labels = CustomLabels::new();
        let segments = segment_path("/var/log/syslog", &labels);
        let resegmented = segment_path(&segments.last().unwrap().full_path, &labels);

        assert_eq!(segments, resegmented);
    }

    #[test]
    fn test_full_paths_are_prefixes() {
        let segments = segment_path("C:\\Users\\User\\Documents", &CustomLabels::new());
        for segment in &segments {
            assert!("C:\\Users\\User\\Documents".starts_with(&segment.full_path));
        }
    }
}
