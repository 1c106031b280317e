use std::path::Path;

use tracing::debug;

use crate::container::AppContainer;
use crate::errors::GmrcError;
use crate::settings::Options;
use crate::usecases::ShowSettingsUseCase;

/// Execute the settings command
///
/// Resolves the settings file for the current directory (or `config_file`
/// when given) and prints the raw value as JSON.
///
/// # Arguments
/// * `container` - Wired adapters
/// * `config_file` - Explicit settings file, relative to the current directory
/// * `compact` - Print on a single line instead of pretty-printing
pub fn execute(
    container: &AppContainer,
    config_file: Option<&Path>,
    compact: bool,
) -> Result<(), GmrcError> {
    let resolver = container.resolver()?;
    let options = config_file.map_or_else(Options::default, Options::with_config_file);

    debug!(working_dir = %resolver.working_dir().display(), "resolving settings");

    ShowSettingsUseCase::new(container.ui.clone()).execute(&resolver, &options, compact)
}
