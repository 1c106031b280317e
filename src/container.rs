use std::sync::Arc;

use crate::adapters::{NodeCli, TerminalInteraction, UnixFs};
use crate::core::ports::{FileSystem, ModuleRuntime, UserInteraction};
use crate::errors::GmrcError;
use crate::settings::Resolver;

pub struct AppContainer {
    pub fs: Arc<dyn FileSystem>,
    pub runtime: Arc<dyn ModuleRuntime>,
    pub ui: Arc<dyn UserInteraction>,
}

impl AppContainer {
    pub fn new(node: &str) -> Self {
        Self {
            fs: Arc::new(UnixFs::new()),
            runtime: Arc::new(NodeCli::with_program(node)),
            ui: Arc::new(TerminalInteraction::new()),
        }
    }

    /// Build a resolver anchored at the process working directory
    pub fn resolver(&self) -> Result<Resolver, GmrcError> {
        let working_dir = self.fs.current_dir()?;
        Ok(Resolver::new(
            Arc::clone(&self.fs),
            Arc::clone(&self.runtime),
            working_dir,
        ))
    }
}
