use url::Url;

use crate::settings::Settings;

#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    #[error("Failed to execute {program}: {reason}")]
    Execution { program: String, reason: String },

    #[error("{0}")]
    Evaluation(String),

    #[error("Module has no default export")]
    MissingDefaultExport,

    #[error("Failed to parse module output: {0}")]
    Parse(String),
}

/// Interface for evaluating code-based settings files
///
/// Implementations load the module behind a `file://` URL and hand back its
/// default export. Nothing is cached between calls: every import evaluates
/// the file again.
pub trait ModuleRuntime: Send + Sync {
    /// Import the module at `url` and return its default export
    ///
    /// # Arguments
    /// * `url` - Absolute `file://` reference to the module
    ///
    /// # Returns
    /// * `Ok(Settings)` - The default-exported value
    /// * `Err(ModuleError::MissingDefaultExport)` - The module evaluated but exports no default
    /// * `Err` - The runtime could not be started or the module failed to evaluate
    fn import_default(&self, url: &Url) -> Result<Settings, ModuleError>;
}
