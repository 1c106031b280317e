use std::process::ExitCode;

mod adapters;
mod commands;
mod container;
mod core;
mod errors;
mod settings;
mod usecases;
mod utils;
mod verbs;

fn main() -> ExitCode {
    commands::Cli::execute()
}
