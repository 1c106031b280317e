use tracing::debug;

use crate::core::ports::FileSystem;
use crate::settings::{CandidatePath, ResolutionError, Settings};

/// Load a JSON5 settings file
///
/// Comments, trailing commas and unquoted keys are accepted. The parsed value
/// is returned as-is.
///
/// # Errors
/// * `ResolutionError::Read` - The file could not be read
/// * `ResolutionError::Parse` - The contents are not valid JSON5
pub fn load_data(
    fs: &dyn FileSystem,
    candidate: &CandidatePath,
) -> Result<Settings, ResolutionError> {
    debug!(path = %candidate.location.display(), "reading settings data file");

    let content = fs
        .read_to_string(&candidate.location)
        .map_err(|source| ResolutionError::Read {
            path: candidate.display.clone(),
            source,
        })?;

    json5::from_str(&content).map_err(|source| ResolutionError::Parse {
        path: candidate.display.clone(),
        source,
    })
}
