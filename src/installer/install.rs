//! Installing missing companions.

use std::cell::RefCell;
use std::path::Path;

use tracing::{debug, info};

use super::agent::Invocation;
use super::detect::InstallerDetector;
use super::registry::InstallAttemptRegistry;
use super::runner::{CommandRunner, SystemRunner};
use super::spec::CompanionSpec;
use crate::error::{LintweaveError, Result};

/// Adds companions as dev dependencies using the project's own installer.
///
/// Installs block until the child process exits: a lint pass later in the
/// same run must see the companion.
pub struct Installer {
    detector: InstallerDetector,
    attempts: InstallAttemptRegistry,
    runner: Box<dyn CommandRunner>,
    installed: RefCell<Vec<String>>,
}

impl Installer {
    /// Installer that spawns real processes.
    pub fn new(attempts: InstallAttemptRegistry) -> Self {
        Self::with_runner(attempts, Box::new(SystemRunner))
    }

    /// Installer with a custom process runner.
    pub fn with_runner(attempts: InstallAttemptRegistry, runner: Box<dyn CommandRunner>) -> Self {
        Self {
            detector: InstallerDetector::new(),
            attempts,
            runner,
            installed: RefCell::new(Vec::new()),
        }
    }

    pub fn attempts(&self) -> &InstallAttemptRegistry {
        &self.attempts
    }

    /// Specs whose install finished successfully this run, in order.
    pub fn installed(&self) -> Vec<String> {
        self.installed.borrow().clone()
    }

    pub fn detector(&self) -> &InstallerDetector {
        &self.detector
    }

    /// The command a user would run to install `spec` into `target_dir`.
    ///
    /// Falls back to an npm instruction when no agent is detected or the
    /// spec does not parse.
    pub fn install_command(&self, spec: &str, target_dir: &Path) -> String {
        let Ok(parsed) = CompanionSpec::parse(spec) else {
            return format!("npm install -D {}", spec);
        };
        match self.detector.detect(target_dir) {
            Some(detected) => detected.install_invocation(&parsed, target_dir).to_string(),
            None => Invocation::manual(&parsed, target_dir).to_string(),
        }
    }

    /// Install `spec` as a dev dependency of the project at `target_dir`.
    ///
    /// Returns `Ok(None)` without doing anything when `spec` was attempted
    /// before in this run, whatever the earlier outcome. Otherwise returns
    /// the installer's captured output, or a line naming the command that
    /// ran when output went straight to the terminal.
    ///
    /// # Errors
    ///
    /// - `InvalidCompanionSpec` if `spec` does not parse
    /// - `NoInstallerDetected` if no agent governs `target_dir`
    /// - `InstallFailed` on spawn failure or non-zero exit
    pub fn install(&self, spec: &str, target_dir: &Path) -> Result<Option<String>> {
        if !self.attempts.record(spec) {
            debug!(spec, "Install already attempted this run");
            return Ok(None);
        }

        let parsed = CompanionSpec::parse(spec)?;
        let detected =
            self.detector
                .detect(target_dir)
                .ok_or_else(|| LintweaveError::NoInstallerDetected {
                    dir: target_dir.to_path_buf(),
                })?;
        let invocation = detected.install_invocation(&parsed, target_dir);

        info!(command = %invocation, "Installing missing companion");
        let outcome = self
            .runner
            .run(&invocation)
            .map_err(|e| LintweaveError::InstallFailed {
                spec: spec.to_string(),
                message: e.to_string(),
            })?;

        if !outcome.success() {
            return Err(LintweaveError::InstallFailed {
                spec: spec.to_string(),
                message: match outcome.exit_code {
                    Some(code) => format!("`{}` exited with code {}", invocation, code),
                    None => format!("`{}` was terminated by a signal", invocation),
                },
            });
        }

        self.installed.borrow_mut().push(spec.to_string());
        Ok(Some(
            outcome
                .output
                .unwrap_or_else(|| format!("Installed {} with `{}`", parsed.name, invocation)),
        ))
    }
}
