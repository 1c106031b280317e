use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::core::ports::{FileSystem, ModuleRuntime};
use crate::settings::data_loader::load_data;
use crate::settings::module_loader::load_module;
use crate::settings::{CandidatePath, LoaderKind, Options, ResolutionError, Settings};

/// Settings resolver
///
/// Walks the candidate locations in priority order and loads the first one
/// that exists. Every call probes and reads from scratch.
pub struct Resolver {
    fs: Arc<dyn FileSystem>,
    runtime: Arc<dyn ModuleRuntime>,
    working_dir: PathBuf,
}

impl Resolver {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        runtime: Arc<dyn ModuleRuntime>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fs,
            runtime,
            working_dir: working_dir.into(),
        }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Resolve and load the settings for this working directory
    ///
    /// Priority order:
    /// 1. `options.config_file` (an error if it does not exist)
    /// 2. `.gmrc`
    /// 3. `.gmrc.js`
    /// 4. `.gmrc.cjs`
    ///
    /// # Errors
    /// * `ResolutionError::NotFound` - The explicit file does not exist
    /// * `ResolutionError::NoSettingsFile` - No explicit file and no default found
    /// * Any loader error for the selected file
    pub fn resolve(&self, options: &Options) -> Result<Settings, ResolutionError> {
        if let Some(config_file) = &options.config_file {
            let candidate = CandidatePath::new(config_file, &self.working_dir);

            // An empty path would otherwise join to the working directory.
            if config_file.as_os_str().is_empty() || !self.fs.exists(&candidate.location) {
                return Err(ResolutionError::NotFound {
                    path: config_file.clone(),
                });
            }

            return self.load(&candidate);
        }

        // Probe one at a time: a later code file must never be evaluated
        // once an earlier candidate has matched.
        for candidate in CandidatePath::defaults(&self.working_dir) {
            if self.fs.exists(&candidate.location) {
                return self.load(&candidate);
            }
            debug!(path = %candidate.location.display(), "settings candidate not found");
        }

        Err(ResolutionError::NoSettingsFile)
    }

    fn load(&self, candidate: &CandidatePath) -> Result<Settings, ResolutionError> {
        debug!(
            path = %candidate.location.display(),
            kind = ?candidate.kind,
            "loading settings"
        );

        match candidate.kind {
            LoaderKind::Data => load_data(self.fs.as_ref(), candidate),
            LoaderKind::Code => load_module(
                self.fs.as_ref(),
                self.runtime.as_ref(),
                &self.working_dir,
                candidate,
            ),
        }
    }
}
