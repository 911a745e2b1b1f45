//! Check command implementation.
//!
//! The `lintweave check` command composes the configuration and evaluates the
//! rules this crate implements itself. Today those are the missing-companion
//! diagnostics; with `--fix` they install what is missing.

use std::path::{Path, PathBuf};

use futures::executor::block_on;

use crate::assembler::{assemble, load_options, OPTIONS_FILES};
use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::installer::{InstallAttemptRegistry, Installer};
use crate::lint::{
    run_local_rules, HumanFormatter, JsonFormatter, LintDiagnostic, LintFormatter, OutputFormat,
    RunSettings, Severity,
};
use crate::producers::ProducerContext;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: CheckArgs,
    installer: Installer,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config: Option<&Path>, args: CheckArgs) -> Self {
        Self::with_installer(
            project_root,
            config,
            args,
            Installer::new(InstallAttemptRegistry::new()),
        )
    }

    /// Create a check command with a custom installer.
    pub fn with_installer(
        project_root: &Path,
        config: Option<&Path>,
        args: CheckArgs,
        installer: Installer,
    ) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.map(Path::to_path_buf),
            args,
            installer,
        }
    }

    fn format_output(&self, diagnostics: &[LintDiagnostic], use_color: bool) -> String {
        let mut output = Vec::new();
        match self.args.format {
            OutputFormat::Json => JsonFormatter::new().format(diagnostics, &mut output).ok(),
            OutputFormat::Human => HumanFormatter::new(use_color)
                .format(diagnostics, &mut output)
                .ok(),
        };
        String::from_utf8(output).unwrap_or_default()
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let loaded = load_options(&self.project_root, self.config.as_deref())?;
        let ctx = ProducerContext::for_project(&self.project_root);
        let fragments = block_on(assemble(loaded.options, &ctx))?;

        let filename = loaded
            .path
            .unwrap_or_else(|| self.project_root.join(OPTIONS_FILES[0]));
        let settings = RunSettings {
            filename: &filename,
            cwd: &self.project_root,
            repair_enabled: self.args.fix,
            installer: &self.installer,
        };
        let diagnostics = run_local_rules(&fragments, &settings);

        let has_errors = diagnostics.iter().any(|d| d.severity == Severity::Error);

        if diagnostics.is_empty() && self.args.format == OutputFormat::Human {
            ui.success("No problems found");
            return Ok(CommandResult::success());
        }

        let output = self.format_output(&diagnostics, ui.colors_enabled());
        ui.message(output.trim_end());

        if self.args.fix && !self.installer.installed().is_empty() {
            ui.warning("Companions were installed; run again to compose with them");
        }

        if has_errors {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
