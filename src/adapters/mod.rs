pub mod node_cli;
pub mod terminal_interaction;
pub mod unix_fs;

#[cfg(test)]
pub mod test_helpers;

pub use node_cli::NodeCli;
pub use terminal_interaction::TerminalInteraction;
pub use unix_fs::UnixFs;
