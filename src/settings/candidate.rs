use std::path::{Path, PathBuf};

/// Default settings locations, probed in this order
pub const DEFAULT_SETTINGS_FILES: [&str; 3] = [".gmrc", ".gmrc.js", ".gmrc.cjs"];

/// Suffixes that mark a settings file as code rather than data
const CODE_SUFFIXES: [&str; 3] = [".js", ".mjs", ".cjs"];

/// Which loader a settings file is handed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderKind {
    /// JSON5 document
    Data,
    /// Module whose default export is the settings value
    Code,
}

impl LoaderKind {
    /// Classify a path by its suffix
    ///
    /// Only the path text is inspected. A file ending in `.js`, `.mjs` or
    /// `.cjs` is code; anything else (including no extension) is data.
    ///
    /// # Examples
    /// - `.gmrc` -> Data
    /// - `.gmrc.js` -> Code
    /// - `settings.json5` -> Data
    /// - `settings.JS` -> Data (suffixes are case-sensitive)
    pub fn classify(path: &Path) -> Self {
        let bytes = path.as_os_str().as_encoded_bytes();

        if CODE_SUFFIXES
            .iter()
            .any(|suffix| bytes.ends_with(suffix.as_bytes()))
        {
            LoaderKind::Code
        } else {
            LoaderKind::Data
        }
    }
}

/// A settings file location computed for a single resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePath {
    /// The path as the user (or the default table) spelled it
    pub display: PathBuf,
    /// The same path anchored at the working directory
    pub location: PathBuf,
    pub kind: LoaderKind,
}

impl CandidatePath {
    pub fn new(path: &Path, working_dir: &Path) -> Self {
        Self {
            display: path.to_path_buf(),
            location: working_dir.join(path),
            kind: LoaderKind::classify(path),
        }
    }

    /// The default candidates for `working_dir`, in priority order
    pub fn defaults(working_dir: &Path) -> Vec<Self> {
        DEFAULT_SETTINGS_FILES
            .iter()
            .map(|name| Self::new(Path::new(name), working_dir))
            .collect()
    }
}
