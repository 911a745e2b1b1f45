//! Blocking process invocation for installers.

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use tracing::debug;

use super::agent::Invocation;

/// Outcome of a finished installer process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,
    /// Output the runner captured, if it captured any.
    pub output: Option<String>,
    /// Execution duration.
    pub duration: Duration,
}

impl CommandOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs installer invocations to completion.
pub trait CommandRunner {
    /// Run `invocation`, blocking until it exits.
    ///
    /// Spawn failures are returned as errors; a non-zero exit is a
    /// successful run with a failing [`CommandOutcome`].
    fn run(&self, invocation: &Invocation) -> std::io::Result<CommandOutcome>;
}

/// Spawns the real process with stdio inherited from this one, so install
/// progress shows up wherever the host run prints.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> std::io::Result<CommandOutcome> {
        let start = Instant::now();
        debug!(command = %invocation, cwd = %invocation.cwd.display(), "Running installer");

        let status = Command::new(program_name(&invocation.program))
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        Ok(CommandOutcome {
            exit_code: status.code(),
            output: None,
            duration: start.elapsed(),
        })
    }
}

// Node agents ship as `.cmd` shims on Windows.
#[cfg(windows)]
fn program_name(program: &str) -> String {
    format!("{}.cmd", program)
}

#[cfg(not(windows))]
fn program_name(program: &str) -> String {
    program.to_string()
}
