//! File system utility functions
//!
//! Provides safe file operations with proper error handling.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, instrument};

/// Utility struct for file system operations
#[derive(Debug)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub fn new() -> Self {
        Self
    }

    /// Remove a file, propagating any failure
    #[instrument(skip(self))]
    pub fn remove_file<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        fs::remove_file(path)?;
        debug!("Removed file: {}", path.display());
        Ok(())
    }

    /// Check if a path exists and is a directory
    pub fn is_dir<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref().is_dir()
    }

    /// Write content to a file, creating parent directories if needed
    #[instrument(skip(self, contents))]
    pub fn write_file<P: AsRef<Path> + std::fmt::Debug, C: AsRef<[u8]>>(
        &self,
        path: P,
        contents: C,
    ) -> io::Result<()> {
        let path = path.as_ref();

        debug!("Writing file: {}", path.display());

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, contents)?;
        debug!("File written successfully");
        Ok(())
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_remove_file() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let file_path = temp_dir.path().join("stale.nupkg");
        fs::write(&file_path, "content").unwrap();

        fs_utils.remove_file(&file_path).unwrap();
        assert!(!file_path.exists());
    }

    #[test]
    fn test_remove_file_missing_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let result = fs_utils.remove_file(temp_dir.path().join("missing.nupkg"));
        assert!(result.is_err());
    }

    #[test]
    fn test_write_file_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let file_path = temp_dir.path().join("reports").join("run.env");
        fs_utils.write_file(&file_path, "KEY=value\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "KEY=value\n");
    }

    #[test]
    fn test_is_dir() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let file_path = temp_dir.path().join("file.txt");
        fs::write(&file_path, "content").unwrap();

        assert!(fs_utils.is_dir(temp_dir.path()));
        assert!(!fs_utils.is_dir(&file_path));
        assert!(!fs_utils.is_dir(temp_dir.path().join("missing")));
    }
}
