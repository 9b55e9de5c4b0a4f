//! FileSystem trait definition

use anyhow::Result;
use std::path::Path;

/// Type of file system entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    File,
    Directory,
}

/// Abstraction over the read operations version parsers need
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Read file contents, or `None` when nothing exists at `path`.
    ///
    /// Any other failure (a directory in place of the file, permissions,
    /// invalid UTF-8) is an error.
    fn read_if_exists(&self, path: &Path) -> Result<Option<String>> {
        if !self.exists(path) {
            return Ok(None);
        }
        self.read_to_string(path).map(Some)
    }
}
