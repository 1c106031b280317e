/// Interface for writing results back to the user
///
/// This trait abstracts console output in CLI applications, allowing for
/// different implementations (e.g., terminal, mock for testing).
pub trait UserInteraction: Send + Sync {
    /// Prints a message to the user
    ///
    /// # Arguments
    /// * `message` - The message to display
    fn print(&self, message: &str);

    /// Prints an error message to the user
    ///
    /// # Arguments
    /// * `message` - The error message to display
    fn print_error(&self, message: &str);
}
