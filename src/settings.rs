//! Settings resolution for gmrc
//!
//! This module locates the settings file for the current project, loads it
//! with the loader its file name calls for, and hands back the raw value.
//! The value is not validated here.
//!
//! # Resolution Priority
//!
//! 1. Explicit `--config <FILE>` (must exist)
//! 2. `.gmrc` (JSON5)
//! 3. `.gmrc.js` (module, default export)
//! 4. `.gmrc.cjs` (module, default export)
//!
//! The first match wins; nothing is merged.

mod candidate;
mod data_loader;
mod module_loader;
mod resolver;

use std::path::PathBuf;
use thiserror::Error;

use crate::core::ports::FileSystemError;

pub use candidate::{CandidatePath, LoaderKind};
pub use resolver::Resolver;

/// Raw settings payload; its shape belongs to the caller
pub type Settings = serde_json::Value;

#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("Failed to import '{}': file not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: FileSystemError,
    },

    #[error("Failed to parse '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: json5::Error,
    },

    #[error("Failed to import '{reference}'; error:\n    {cause}")]
    Import { reference: String, cause: String },

    #[error("No .gmrc file found; please run the init command first.")]
    NoSettingsFile,
}

/// Caller-supplied resolution options
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Explicit settings file; skips the default locations when set
    pub config_file: Option<PathBuf>,
}

impl Options {
    pub fn with_config_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_file: Some(path.into()),
        }
    }
}
