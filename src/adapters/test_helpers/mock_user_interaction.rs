//! Mock user interaction for testing
//!
//! Captures console output for assertions.

use std::sync::Mutex;

use crate::core::ports::UserInteraction;

/// Mock user interaction for testing
pub struct MockUserInteraction {
    printed_messages: Mutex<Vec<String>>,
    error_messages: Mutex<Vec<String>>,
}

impl UserInteraction for MockUserInteraction {
    fn print(&self, message: &str) {
        self.printed_messages
            .lock()
            .unwrap()
            .push(message.to_string());
    }

    fn print_error(&self, message: &str) {
        self.error_messages.lock().unwrap().push(message.to_string());
    }
}

impl MockUserInteraction {
    pub fn new() -> Self {
        Self {
            printed_messages: Mutex::new(Vec::new()),
            error_messages: Mutex::new(Vec::new()),
        }
    }

    /// Get printed messages (for assertions)
    pub fn get_printed_messages(&self) -> Vec<String> {
        self.printed_messages.lock().unwrap().clone()
    }

    /// Get error messages (for assertions)
    pub fn get_error_messages(&self) -> Vec<String> {
        self.error_messages.lock().unwrap().clone()
    }
}

impl Default for MockUserInteraction {
    fn default() -> Self {
        Self::new()
    }
}
