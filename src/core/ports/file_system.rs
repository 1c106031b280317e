use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum FileSystemError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Path error: {0}")]
    PathError(String),
}

pub trait FileSystem: Send + Sync {
    /// Check if a path is visible to the current process
    ///
    /// # Arguments
    /// * `path` - The path to check
    ///
    /// # Returns
    /// * `true` if the entry exists and its metadata can be read
    /// * `false` on any failure (missing entry, permission denied, broken link)
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - The absolute path to the current working directory
    /// * `Err` - If the current directory cannot be determined
    fn current_dir(&self) -> Result<PathBuf, FileSystemError>;

    /// Read the whole file as UTF-8 text
    ///
    /// # Arguments
    /// * `path` - The file to read
    ///
    /// # Returns
    /// * `Ok(String)` - The file contents
    /// * `Err` - If the file cannot be opened, read, or is not valid UTF-8
    fn read_to_string(&self, path: &Path) -> Result<String, FileSystemError>;

    /// Normalize a path to an absolute ``PathBuf``
    ///
    /// # Arguments
    /// * `path` - The path to normalize
    /// * `base` - Base directory for resolving relative paths
    ///
    /// # Path resolution rules
    /// - `/absolute/path`: Used as-is (base parameter is ignored)
    /// - `relative/path`: Resolved from the base directory
    /// - `.` and `..` components are folded lexically, without touching the disk
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - The normalized absolute path
    /// * `Err` - If the path is empty
    fn normalize(&self, path: &Path, base: &Path) -> Result<PathBuf, FileSystemError>;
}
