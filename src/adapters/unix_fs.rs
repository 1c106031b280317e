use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::core::ports::{FileSystem, FileSystemError};

#[derive(Debug)]
pub struct UnixFs;

impl UnixFs {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnixFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for UnixFs {
    fn exists(&self, path: &Path) -> bool {
        // any metadata failure is reported as absence
        fs::metadata(path).is_ok()
    }

    fn current_dir(&self) -> Result<PathBuf, FileSystemError> {
        let dir = std::env::current_dir()?;
        Ok(dir)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, FileSystemError> {
        let content = fs::read_to_string(path)?;
        Ok(content)
    }

    fn normalize(&self, path: &Path, base: &Path) -> Result<PathBuf, FileSystemError> {
        if path.as_os_str().is_empty() {
            return Err(FileSystemError::PathError(
                "Cannot normalize an empty path".into(),
            ));
        }

        let mut normalized_path = PathBuf::new();

        if path.is_relative() {
            normalized_path.push(base);
        }

        for component in path.components() {
            match component {
                Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                    normalized_path.push(component);
                }
                Component::CurDir => {}
                Component::ParentDir => {
                    normalized_path.pop();
                }
            }
        }

        Ok(normalized_path)
    }
}
