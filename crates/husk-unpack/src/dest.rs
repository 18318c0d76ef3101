use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Make sure `destination` exists, optionally emptying it first.
///
/// Purging removes each entry directly under `destination`: directories
/// recursively, files and symlinks as single entries. Symlinks are never
/// followed, so a link pointing outside the destination only loses the
/// link itself.
pub fn prepare_destination(destination: &Path, purge: bool) -> Result<()> {
    if !destination.exists() {
        return fs::create_dir_all(destination).map_err(|e| Error::DestinationCreate {
            path: destination.to_path_buf(),
            source: e,
        });
    }

    if purge {
        let entries = fs::read_dir(destination).map_err(|e| Error::DestinationPurge {
            path: destination.to_path_buf(),
            source: e,
        })?;
        for entry in entries {
            let entry = entry.map_err(|e| Error::DestinationPurge {
                path: destination.to_path_buf(),
                source: e,
            })?;
            let path = entry.path();
            // file_type() does not follow symlinks, so a link to a
            // directory is removed as a file entry.
            let file_type = entry.file_type().map_err(|e| Error::DestinationPurge {
                path: path.clone(),
                source: e,
            })?;
            let removed = if file_type.is_dir() {
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            };
            removed.map_err(|e| Error::DestinationPurge { path, source: e })?;
        }
    }

    Ok(())
}
