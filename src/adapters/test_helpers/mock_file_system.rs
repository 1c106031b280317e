//! Mock filesystem for testing
//!
//! Provides an in-memory filesystem simulation with basic operations.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::adapters::UnixFs;
use crate::core::ports::{FileSystem, FileSystemError};

/// Mock entry in the filesystem
#[derive(Debug, Clone)]
struct MockFsEntry {
    content: String,
    visible: bool,
    readable: bool,
}

/// Mock filesystem for testing
///
/// Provides an in-memory filesystem simulation with basic operations.
pub struct MockFileSystem {
    entries: Mutex<HashMap<PathBuf, MockFsEntry>>,
    current_dir: Mutex<PathBuf>,
    force_error: Mutex<Option<FileSystemError>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            current_dir: Mutex::new(PathBuf::from("/home/testuser/work")),
            force_error: Mutex::new(None),
        }
    }

    fn insert(&self, path: impl AsRef<Path>, entry: MockFsEntry) {
        self.entries
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf(), entry);
    }

    /// Add a readable file to the mock filesystem
    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let entry = MockFsEntry {
            content: content.to_string(),
            visible: true,
            readable: true,
        };
        self.insert(path, entry);
    }

    /// Add a file that exists but fails to read (permission denied)
    pub fn add_unreadable_file(&self, path: impl AsRef<Path>) {
        let entry = MockFsEntry {
            content: String::new(),
            visible: true,
            readable: false,
        };
        self.insert(path, entry);
    }

    /// Add a file whose existence probe fails
    pub fn add_hidden_file(&self, path: impl AsRef<Path>) {
        let entry = MockFsEntry {
            content: String::new(),
            visible: false,
            readable: false,
        };
        self.insert(path, entry);
    }

    /// Set the current directory for testing
    pub fn set_current_dir(&self, path: impl AsRef<Path>) {
        *self.current_dir.lock().unwrap() = path.as_ref().to_path_buf();
    }

    /// Inject an error to be returned on the next operation
    pub fn inject_error(&self, error: FileSystemError) {
        *self.force_error.lock().unwrap() = Some(error);
    }

    fn check_error(&self) -> Result<(), FileSystemError> {
        if let Some(err) = self.force_error.lock().unwrap().take() {
            return Err(err);
        }
        Ok(())
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.entries
            .lock()
            .unwrap()
            .get(path)
            .is_some_and(|e| e.visible)
    }

    fn current_dir(&self) -> Result<PathBuf, FileSystemError> {
        self.check_error()?;
        Ok(self.current_dir.lock().unwrap().clone())
    }

    fn read_to_string(&self, path: &Path) -> Result<String, FileSystemError> {
        self.check_error()?;

        let entries = self.entries.lock().unwrap();
        match entries.get(path) {
            Some(entry) if entry.readable => Ok(entry.content.clone()),
            Some(_) => Err(FileSystemError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "Permission denied",
            ))),
            None => Err(FileSystemError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No such file or directory",
            ))),
        }
    }

    fn normalize(&self, path: &Path, base: &Path) -> Result<PathBuf, FileSystemError> {
        self.check_error()?;
        UnixFs::new().normalize(path, base)
    }
}
