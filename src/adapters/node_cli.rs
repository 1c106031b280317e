use std::process::Command;

use serde::Deserialize;
use tracing::trace;
use url::Url;

use crate::core::ports::{ModuleError, ModuleRuntime};
use crate::settings::Settings;

const DEFAULT_PROGRAM: &str = "node";

/// Imports the module named by the last argument and writes one JSON report
/// to stdout. Anything the module itself prints to stdout goes to stderr.
/// The process exits once the report is flushed, even if the module left
/// timers or sockets open.
const BOOTSTRAP: &str = r"
const url = process.argv.at(-1);
const writeReport = process.stdout.write.bind(process.stdout);
process.stdout.write = process.stderr.write.bind(process.stderr);
let report;
try {
  const mod = await import(url);
  report = JSON.stringify(mod.default === undefined
    ? { outcome: 'missingDefault' }
    : { outcome: 'loaded', value: mod.default });
} catch (error) {
  report = JSON.stringify({ outcome: 'failed', stack: String(error?.stack ?? error) });
}
writeReport(report, () => process.exit(0));
";

#[derive(Debug, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
enum ImportReport {
    Loaded {
        #[serde(default)]
        value: Settings,
    },
    MissingDefault,
    Failed {
        stack: String,
    },
}

/// Module runtime backed by a `node` executable
pub struct NodeCli {
    program: String,
}

impl NodeCli {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run_bootstrap(&self, url: &Url) -> Result<String, ModuleError> {
        trace!(program = %self.program, %url, "spawning module runtime");

        match Command::new(&self.program)
            .args(["--input-type=module", "-e", BOOTSTRAP, "--", url.as_str()])
            .output()
        {
            Ok(output) if output.status.success() => {
                Ok(String::from_utf8_lossy(&output.stdout).into_owned())
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                trace!(status = ?output.status.code(), "module runtime failed");

                Err(ModuleError::Evaluation(stderr.trim_end().to_string()))
            }
            Err(error) => Err(ModuleError::Execution {
                program: self.program.clone(),
                reason: error.to_string(),
            }),
        }
    }
}

impl Default for NodeCli {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleRuntime for NodeCli {
    fn import_default(&self, url: &Url) -> Result<Settings, ModuleError> {
        let stdout = self.run_bootstrap(url)?;

        let report: ImportReport =
            serde_json::from_str(&stdout).map_err(|e| ModuleError::Parse(e.to_string()))?;

        match report {
            ImportReport::Loaded { value } => Ok(value),
            ImportReport::MissingDefault => Err(ModuleError::MissingDefaultExport),
            ImportReport::Failed { stack } => Err(ModuleError::Evaluation(stack)),
        }
    }
}
