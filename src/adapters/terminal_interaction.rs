use std::io::{self, Write};

use crate::core::ports::UserInteraction;

pub struct TerminalInteraction;

impl TerminalInteraction {
    pub fn new() -> Self {
        Self
    }

    fn write_line<W: Write>(write: &mut W, message: &str) {
        // a closed pipe (e.g. `gmrc settings | head`) is not an error for us
        let _ = writeln!(write, "{message}");
    }
}

impl Default for TerminalInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInteraction for TerminalInteraction {
    fn print(&self, message: &str) {
        Self::write_line(&mut io::stdout().lock(), message);
    }

    fn print_error(&self, message: &str) {
        Self::write_line(&mut io::stderr().lock(), message);
    }
}
