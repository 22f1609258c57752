//! Stale archive discovery and removal
//!
//! Archives are identified purely by file-name suffix. Matching is shallow:
//! only regular files directly inside a project directory are considered.

use crate::error::{RebuilderError, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Build the file-name pattern for an archive suffix
fn archive_pattern(suffix: &str) -> Result<Pattern> {
    Pattern::new(&format!("*{}", Pattern::escape(suffix))).map_err(|e| {
        RebuilderError::config_with_source(format!("Invalid archive suffix '{suffix}'"), e)
    })
}

/// Find archives directly inside `dir`, in sorted order
#[instrument]
pub fn find_archives(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let pattern = archive_pattern(suffix)?;

    let entries = std::fs::read_dir(dir)
        .map_err(|e| RebuilderError::file_system("list", dir.to_path_buf(), e))?;

    let mut archives = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|e| RebuilderError::file_system("list", dir.to_path_buf(), e))?;
        let file_type = entry
            .file_type()
            .map_err(|e| RebuilderError::file_system("stat", entry.path(), e))?;
        if !file_type.is_file() {
            continue;
        }

        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if pattern.matches(name) {
            debug!("Found archive: {}", entry.path().display());
            archives.push(entry.path());
        }
    }

    archives.sort();
    Ok(archives)
}

/// Delete every archive directly inside `dir`, returning the removed paths.
/// Zero matches is a no-op; the first failed deletion aborts.
#[instrument(skip(fs_utils))]
pub fn sweep_archives(
    fs_utils: &crate::utils::fs::FileSystemUtils,
    dir: &Path,
    suffix: &str,
) -> Result<Vec<PathBuf>> {
    let archives = find_archives(dir, suffix)?;

    for path in &archives {
        fs_utils
            .remove_file(path)
            .map_err(|e| RebuilderError::file_system("remove", path.clone(), e))?;
    }

    debug!("Removed {} stale archive(s) from {}", archives.len(), dir.display());
    Ok(archives)
}
