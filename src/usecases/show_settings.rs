use std::sync::Arc;

use crate::core::ports::UserInteraction;
use crate::errors::GmrcError;
use crate::settings::{Options, Resolver};

pub struct ShowSettingsUseCase {
    ui: Arc<dyn UserInteraction>,
}

impl ShowSettingsUseCase {
    pub fn new(ui: Arc<dyn UserInteraction>) -> Self {
        Self { ui }
    }

    /// Resolve the settings and print them as JSON
    pub fn execute(
        &self,
        resolver: &Resolver,
        options: &Options,
        compact: bool,
    ) -> Result<(), GmrcError> {
        let settings = resolver.resolve(options)?;

        let rendered = if compact {
            serde_json::to_string(&settings)?
        } else {
            serde_json::to_string_pretty(&settings)?
        };

        self.ui.print(&rendered);
        Ok(())
    }
}
