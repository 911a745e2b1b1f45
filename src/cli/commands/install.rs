//! Install command implementation.
//!
//! The `lintweave install` command adds companion packages as dev
//! dependencies with the project's own package manager.

use std::path::{Path, PathBuf};

use crate::cli::args::InstallArgs;
use crate::error::Result;
use crate::installer::{InstallAttemptRegistry, Installer};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand {
    project_root: PathBuf,
    args: InstallArgs,
    installer: Installer,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(project_root: &Path, args: InstallArgs) -> Self {
        Self::with_installer(project_root, args, Installer::new(InstallAttemptRegistry::new()))
    }

    /// Create an install command with a custom installer.
    pub fn with_installer(project_root: &Path, args: InstallArgs, installer: Installer) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            installer,
        }
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut failed = 0;

        for spec in &self.args.specs {
            match self.installer.install(spec, &self.project_root) {
                Ok(Some(output)) => ui.success(&output),
                Ok(None) => ui.warning(&format!("Skipping {}: already attempted", spec)),
                Err(e) => {
                    ui.error(&e.to_string());
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
