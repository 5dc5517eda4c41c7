//! # Folder Listing
//!
//! The directory scan behind the folder selection popup: immediate
//! subdirectories only, hidden entries excluded, sorted case-insensitively
//! by name. Filesystem problems are logged and degrade to an empty
//! listing; they never propagate to the caller.

use std::fs;
use std::path::{Path, PathBuf};

/// One subdirectory in a folder listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    /// The directory name.
    pub name: String,
    /// The full path of the directory.
    pub path: PathBuf,
}

/// List the immediate subdirectories of `path`.
///
/// Entries whose names start with `.` are excluded. The result is sorted
/// case-insensitively. A missing path, a non-directory path and any I/O or
/// permission error all produce an empty listing.
pub fn list_folders(path: &Path) -> Vec<FolderEntry> {
    let mut folders = Vec::new();

    if !path.exists() {
        log::warn!("Path does not exist: {}", path.display());
        return folders;
    }

    if !path.is_dir() {
        log::warn!("Path is not a directory: {}", path.display());
        return folders;
    }

    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(err) => {
            log::error!("Error scanning path {}: {err}", path.display());
            return folders;
        },
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::error!("Error reading entry in {}: {err}", path.display());
                continue;
            },
        };

        let is_dir = entry
            .file_type()
            .map(|file_type| file_type.is_dir())
            .unwrap_or(false);
        if !is_dir {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        folders.push(FolderEntry {
            name,
            path: entry.path(),
        });
    }

    folders.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    log::debug!("Found {} folders in {}", folders.len(), path.display());

    folders
}
