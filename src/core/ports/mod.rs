pub mod file_system;
pub mod module_runtime;
pub mod user_interaction;

pub use file_system::{FileSystem, FileSystemError};
pub use module_runtime::{ModuleError, ModuleRuntime};
pub use user_interaction::UserInteraction;
