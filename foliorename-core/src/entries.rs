use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One directory entry, read once per run and immutable for its duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub is_dir: bool,
}

/// List a directory and return its entries sorted by case-insensitive ASCII
/// comparison of the raw name (not locale-aware). Files and directories are
/// both returned; kind filtering belongs to the planner.
///
/// Entries whose names are not valid UTF-8 are skipped, matching the original
/// tool which only ever saw string names.
pub fn list_entries(dir: &Path) -> Result<Vec<Entry>, Error> {
    let unreadable = |source| Error::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for item in fs::read_dir(dir).map_err(unreadable)? {
        let item = item.map_err(unreadable)?;
        let Ok(name) = item.file_name().into_string() else {
            continue;
        };
        // path().is_dir() follows symlinks, like Java's File.isDirectory
        let is_dir = item.path().is_dir();
        entries.push(Entry { name, is_dir });
    }

    entries.sort_by_cached_key(|e| e.name.to_ascii_lowercase());
    Ok(entries)
}
