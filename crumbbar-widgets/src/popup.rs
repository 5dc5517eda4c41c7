//! # Folder Selection Popup
//!
//! The popup shown when the current-folder crumb is activated: a menu of
//! the current directory's subfolders. The model owns the listing and
//! materializes menu entries with selection closures; presenting the menu
//! is the renderer's job.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::listing::{list_folders, FolderEntry};

/// Label of the disabled placeholder entry shown for an empty listing.
pub const NO_FOLDERS_LABEL: &str = "No folders found";

/// Callback invoked with the selected folder path.
pub type SelectCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// An entry in the folder selection menu.
#[derive(Clone)]
pub enum PopupMenuItem {
    /// A selectable folder.
    Action {
        /// The folder name shown in the menu.
        label: String,
        /// Fires the selection callback with the folder path.
        action: Arc<dyn Fn() + Send + Sync>,
    },
    /// A non-selectable placeholder entry.
    Disabled {
        /// The placeholder text.
        label: String,
    },
}

/// The folder selection popup model.
///
/// ```rust,no_run
/// use crumbbar_widgets::popup::FolderPopup;
///
/// let popup = FolderPopup::for_path("/home/user");
/// for entry in popup.entries() {
///     println!("{}", entry.name);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FolderPopup {
    current_path: PathBuf,
    entries: Vec<FolderEntry>,
}

impl FolderPopup {
    /// Build the popup model for a directory, scanning it immediately.
    pub fn for_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        log::debug!("Showing popup for path: {}", path.display());

        Self {
            current_path: path.to_path_buf(),
            entries: list_folders(path),
        }
    }

    /// The directory this popup lists.
    pub fn path(&self) -> &Path {
        &self.current_path
    }

    /// The listed subfolders.
    pub fn entries(&self) -> &[FolderEntry] {
        &self.entries
    }

    /// Whether the listing came back empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Materialize the menu entries, wiring `on_select` into each one.
    ///
    /// An empty listing yields a single disabled placeholder entry.
    pub fn menu_items(&self, on_select: SelectCallback) -> Vec<PopupMenuItem> {
        if self.entries.is_empty() {
            return vec![PopupMenuItem::Disabled {
                label: NO_FOLDERS_LABEL.to_string(),
            }];
        }

        self.entries
            .iter()
            .map(|entry| {
                let path = entry.path.to_string_lossy().into_owned();
                let on_select = on_select.clone();
                PopupMenuItem::Action {
                    label: entry.name.clone(),
                    action: Arc::new(move || {
                        log::info!("Folder selected: {path}");
                        on_select(&path);
                    }),
                }
            })
            .collect()
    }
}
