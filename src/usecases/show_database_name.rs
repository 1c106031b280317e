use std::sync::Arc;

use crate::core::database_name;
use crate::core::ports::UserInteraction;
use crate::errors::GmrcError;

pub struct ShowDatabaseNameUseCase {
    ui: Arc<dyn UserInteraction>,
}

impl ShowDatabaseNameUseCase {
    pub fn new(ui: Arc<dyn UserInteraction>) -> Self {
        Self { ui }
    }

    pub fn execute(&self, connection_string: &str) -> Result<String, GmrcError> {
        let name = database_name(connection_string)?;
        self.ui.print(&name);
        Ok(name)
    }
}
