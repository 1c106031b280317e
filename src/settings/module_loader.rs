use std::fmt::Display;
use std::path::Path;

use tracing::debug;
use url::Url;

use crate::core::ports::{FileSystem, ModuleRuntime};
use crate::settings::{CandidatePath, ResolutionError, Settings};

const CAUSE_INDENT: &str = "\n    ";

/// Load a code settings file through the module runtime
///
/// The candidate is anchored at `working_dir` and turned into a `file://`
/// URL before it reaches the runtime, so a bare name such as `.gmrc.js` can
/// never be looked up among installed packages.
///
/// # Errors
/// * `ResolutionError::Import` - The URL could not be built or the runtime
///   failed to produce a default export. The cause keeps its line breaks,
///   each continuation indented by four spaces.
pub fn load_module(
    fs: &dyn FileSystem,
    runtime: &dyn ModuleRuntime,
    working_dir: &Path,
    candidate: &CandidatePath,
) -> Result<Settings, ResolutionError> {
    let location = fs
        .normalize(&candidate.display, working_dir)
        .map_err(|e| import_error(candidate.display.display(), &e))?;

    let url = Url::from_file_path(&location)
        .map_err(|()| import_error(location.display(), &"not an absolute file path"))?;

    debug!(%url, "importing settings module");

    runtime
        .import_default(&url)
        .map_err(|e| import_error(&url, &e))
}

fn import_error(reference: impl Display, cause: &dyn Display) -> ResolutionError {
    ResolutionError::Import {
        reference: reference.to_string(),
        cause: indent_cause(&cause.to_string()),
    }
}

fn indent_cause(cause: &str) -> String {
    cause.replace('\n', CAUSE_INDENT)
}
