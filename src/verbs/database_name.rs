use tracing::debug;

use crate::container::AppContainer;
use crate::errors::GmrcError;
use crate::usecases::ShowDatabaseNameUseCase;
use crate::utils::stdin::read_stdin;

/// Execute the database-name command
///
/// Reads the connection string from stdin when it is not passed as an argument.
pub fn execute(container: &AppContainer, connection_string: Option<&str>) -> Result<(), GmrcError> {
    let input = match connection_string {
        Some(value) => value.to_string(),
        None => {
            debug!("reading connection string from stdin");
            read_stdin()?
        }
    };

    ShowDatabaseNameUseCase::new(container.ui.clone()).execute(&input)?;
    Ok(())
}
