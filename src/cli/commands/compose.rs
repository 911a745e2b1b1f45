//! Compose command implementation.
//!
//! The `lintweave compose` command assembles the configuration for a project
//! and prints the flattened fragment list.

use std::path::{Path, PathBuf};

use futures::executor::block_on;

use crate::assembler::{assemble, load_options};
use crate::cli::args::{ComposeArgs, ComposeFormat};
use crate::error::{LintweaveError, Result};
use crate::producers::ProducerContext;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The compose command implementation.
pub struct ComposeCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: ComposeArgs,
}

impl ComposeCommand {
    /// Create a new compose command.
    pub fn new(project_root: &Path, config: Option<&Path>, args: ComposeArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for ComposeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let loaded = load_options(&self.project_root, self.config.as_deref())?;
        let ctx = ProducerContext::for_project(&self.project_root);
        let fragments = block_on(assemble(loaded.options, &ctx))?;

        match self.args.format {
            ComposeFormat::Names => {
                for fragment in &fragments {
                    ui.message(&fragment.name);
                }
                let source = loaded
                    .path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "defaults".to_string());
                ui.success(&format!(
                    "Composed {} fragments from {}",
                    fragments.len(),
                    source
                ));
            }
            ComposeFormat::Json => {
                let json = serde_json::to_string_pretty(&fragments)
                    .map_err(|e| LintweaveError::Other(e.into()))?;
                ui.message(&json);
            }
        }

        Ok(CommandResult::success())
    }
}
