//! Mock module runtime for testing
//!
//! Serves canned default exports by URL and records every import.

use std::collections::HashMap;
use std::sync::Mutex;

use url::Url;

use crate::core::ports::{ModuleError, ModuleRuntime};
use crate::settings::Settings;

/// Mock module runtime for testing
pub struct MockModuleRuntime {
    modules: Mutex<HashMap<String, Result<Settings, ModuleError>>>,
    imported: Mutex<Vec<String>>,
}

impl MockModuleRuntime {
    pub fn new() -> Self {
        Self {
            modules: Mutex::new(HashMap::new()),
            imported: Mutex::new(Vec::new()),
        }
    }

    /// Register a module whose default export is `value`
    pub fn add_module(&self, url: &str, value: Settings) {
        self.modules
            .lock()
            .unwrap()
            .insert(url.to_string(), Ok(value));
    }

    /// Register a module that fails to import with `error`
    pub fn add_failure(&self, url: &str, error: ModuleError) {
        self.modules
            .lock()
            .unwrap()
            .insert(url.to_string(), Err(error));
    }

    /// URLs imported so far, in call order
    pub fn imported(&self) -> Vec<String> {
        self.imported.lock().unwrap().clone()
    }
}

impl Default for MockModuleRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleRuntime for MockModuleRuntime {
    fn import_default(&self, url: &Url) -> Result<Settings, ModuleError> {
        self.imported.lock().unwrap().push(url.to_string());

        // each registered failure is handed out once
        let entry = self.modules.lock().unwrap().remove(url.as_str());
        match entry {
            Some(Ok(value)) => {
                self.add_module(url.as_str(), value.clone());
                Ok(value)
            }
            Some(Err(error)) => Err(error),
            None => Err(ModuleError::Evaluation(format!(
                "Error: Cannot find module '{url}'"
            ))),
        }
    }
}
