use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};

use crate::container::AppContainer;
use crate::errors::GmrcError;
use crate::utils::logging;
use crate::verbs;

#[derive(Debug, Parser)]
#[command(name = "gmrc", version, about = "Locate and load project settings", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[arg(long, global = true, env = "GMRC_NODE", default_value = "node")]
    #[arg(help = "Runtime used to evaluate .js/.mjs/.cjs settings files")]
    node: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn execute() -> ExitCode {
        let args = Cli::parse();
        logging::init(args.verbose);

        let container = AppContainer::new(&args.node);

        match args.run(&container) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                container.ui.print_error(&format!("Error: {e}"));
                ExitCode::FAILURE
            }
        }
    }

    fn run(&self, container: &AppContainer) -> Result<(), GmrcError> {
        match &self.command {
            Some(Commands::Settings { config, compact }) => {
                verbs::settings::execute(container, config.as_deref(), *compact)
            }
            Some(Commands::DatabaseName { connection_string }) => {
                verbs::database_name::execute(container, connection_string.as_deref())
            }
            None => {
                Cli::command().print_help()?;
                Ok(())
            }
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Print the resolved settings as JSON")]
    Settings {
        #[arg(short, long, env = "GMRC_CONFIG")]
        #[arg(help = "Settings file to load instead of .gmrc / .gmrc.js / .gmrc.cjs")]
        config: Option<PathBuf>,

        #[arg(long, help = "Print the JSON on a single line")]
        compact: bool,
    },

    #[command(about = "Print the database name of a connection string")]
    DatabaseName {
        #[arg(help = "Connection string (read from stdin when omitted)")]
        connection_string: Option<String>,
    },
}
