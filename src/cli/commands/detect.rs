//! Detect command implementation.
//!
//! The `lintweave detect` command reports the package manager that would
//! install missing companions for a directory.

use std::path::{Path, PathBuf};

use crate::cli::args::DetectArgs;
use crate::error::Result;
use crate::installer::{CompanionSpec, InstallerDetector};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Package used to illustrate the install command.
const SAMPLE_COMPANION: &str = "eslint-plugin-format";

/// The detect command implementation.
pub struct DetectCommand {
    project_root: PathBuf,
    args: DetectArgs,
}

impl DetectCommand {
    /// Create a new detect command.
    pub fn new(project_root: &Path, args: DetectArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    fn target_dir(&self) -> PathBuf {
        let dir = match &self.args.dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => self.project_root.join(dir),
            None => self.project_root.clone(),
        };
        std::path::absolute(&dir).unwrap_or(dir)
    }
}

impl Command for DetectCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let dir = self.target_dir();
        let Some(detected) = InstallerDetector::new().detect(&dir) else {
            ui.error(&format!("No package manager detected for {}", dir.display()));
            return Ok(CommandResult::failure(1));
        };

        let agent = match &detected.version {
            Some(version) => format!("{}@{}", detected.agent, version),
            None => detected.agent.to_string(),
        };
        ui.message(&format!("Agent:   {}", agent));
        ui.message(&format!("Source:  {}", detected.source));
        ui.message(&format!("Root:    {}", detected.root.display()));
        if detected.is_workspace_install() {
            ui.message("Scope:   workspace root");
        }

        let sample = CompanionSpec::parse(SAMPLE_COMPANION)?;
        let invocation = detected.install_invocation(&sample, &dir);
        ui.message(&format!("Command: {}", invocation));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reports_lockfile_agent() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("yarn.lock"), "").unwrap();
        let mut ui = MockUI::new();

        let result = DetectCommand::new(temp.path(), DetectArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_message("Agent:   yarn"));
        assert!(ui.has_message("Source:  yarn.lock"));
        assert!(ui.has_message("Command: yarn add -D eslint-plugin-format"));
    }

    #[test]
    fn reports_pinned_version_and_workspace_scope() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{ "packageManager": "pnpm@9.1.0" }"#,
        )
        .unwrap();
        fs::write(temp.path().join("pnpm-workspace.yaml"), "packages: ['apps/*']").unwrap();
        let app = temp.path().join("apps").join("web");
        fs::create_dir_all(&app).unwrap();
        let mut ui = MockUI::new();

        DetectCommand::new(
            temp.path(),
            DetectArgs {
                dir: Some(PathBuf::from("apps/web")),
            },
        )
        .execute(&mut ui)
        .unwrap();

        assert!(ui.has_message("Agent:   pnpm@9.1.0"));
        assert!(ui.has_message("Scope:   workspace root"));
        assert!(ui.has_message("pnpm add -w --prod=false -D eslint-plugin-format"));
    }

    #[test]
    fn fails_without_agent() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = DetectCommand::new(temp.path(), DetectArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("No package manager detected"));
    }
}
