use thiserror::Error;

use crate::core::ConnectionStringError;
use crate::core::ports::FileSystemError;
use crate::settings::ResolutionError;

#[derive(Debug, Error)]
pub enum GmrcError {
    #[error(transparent)]
    Settings(#[from] ResolutionError),

    #[error(transparent)]
    ConnectionString(#[from] ConnectionStringError),

    #[error("File system error: {0}")]
    FileSystem(#[from] FileSystemError),

    #[error("Failed to render settings: {0}")]
    Render(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
