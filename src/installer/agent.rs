//! Package installer agents and the commands they run.

use std::fmt;
use std::path::{Path, PathBuf};

use super::spec::CompanionSpec;

/// Dependency-management tool governing a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Agent {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl Agent {
    /// Parse an agent name as written in manifests.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "npm" => Some(Agent::Npm),
            "yarn" => Some(Agent::Yarn),
            "pnpm" => Some(Agent::Pnpm),
            "bun" => Some(Agent::Bun),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Agent::Npm => "npm",
            Agent::Yarn => "yarn",
            Agent::Pnpm => "pnpm",
            Agent::Bun => "bun",
        }
    }

    fn add_subcommand(&self) -> &'static str {
        match self {
            Agent::Npm => "install",
            Agent::Yarn | Agent::Pnpm | Agent::Bun => "add",
        }
    }

    fn dev_flag(&self) -> &'static str {
        match self {
            Agent::Bun => "-d",
            Agent::Npm | Agent::Yarn | Agent::Pnpm => "-D",
        }
    }

    /// Workspace-root marker file for this agent, if it has one.
    pub fn workspace_marker(&self) -> Option<&'static str> {
        match self {
            Agent::Pnpm => Some("pnpm-workspace.yaml"),
            _ => None,
        }
    }

    /// Flags that scope an install to the workspace root.
    pub fn workspace_flags(&self) -> &'static [&'static str] {
        match self {
            Agent::Pnpm => &["-w"],
            _ => &[],
        }
    }

    /// Flag that keeps dev dependencies installed when the environment
    /// would otherwise skip them (e.g. `NODE_ENV=production`).
    fn include_dev_flag(&self) -> Option<&'static str> {
        match self {
            Agent::Pnpm => Some("--prod=false"),
            _ => None,
        }
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What identified the agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionSource {
    /// `packageManager` pin in the manifest.
    ManifestPin,
    /// `devEngines.packageManager` in the manifest.
    DevEngines,
    /// Presence of the named lockfile.
    Lockfile(String),
}

impl fmt::Display for DetectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectionSource::ManifestPin => write!(f, "packageManager field"),
            DetectionSource::DevEngines => write!(f, "devEngines.packageManager field"),
            DetectionSource::Lockfile(name) => write!(f, "{}", name),
        }
    }
}

/// Result of installer detection for a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedAgent {
    pub agent: Agent,
    /// Version from a `packageManager` pin, if any.
    pub version: Option<String>,
    /// Directory where the agent was identified.
    pub root: PathBuf,
    pub source: DetectionSource,
    /// Workspace-scope flags decided at detection time.
    pub workspace_flags: Vec<String>,
}

impl DetectedAgent {
    pub fn new(agent: Agent, root: impl Into<PathBuf>, source: DetectionSource) -> Self {
        Self {
            agent,
            version: None,
            root: root.into(),
            source,
            workspace_flags: Vec::new(),
        }
    }

    pub fn is_workspace_install(&self) -> bool {
        !self.workspace_flags.is_empty()
    }

    /// Build the blocking "add dev dependency" invocation for `spec`.
    ///
    /// Argument order: subcommand, workspace flags, forced dev inclusion,
    /// dev flag, package. Workspace installs run from the workspace root.
    pub fn install_invocation(&self, spec: &CompanionSpec, target_dir: &Path) -> Invocation {
        let mut args = vec![self.agent.add_subcommand().to_string()];
        if self.is_workspace_install() {
            args.extend(self.workspace_flags.iter().cloned());
            if let Some(flag) = self.agent.include_dev_flag() {
                args.push(flag.to_string());
            }
        }
        args.push(self.agent.dev_flag().to_string());
        args.push(spec.install_arg());

        let cwd = if self.is_workspace_install() {
            self.root.clone()
        } else {
            target_dir.to_path_buf()
        };

        Invocation {
            program: self.agent.name().to_string(),
            args,
            cwd,
        }
    }
}

/// A command line ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    /// The manual instruction shown when no agent is detected.
    pub fn manual(spec: &CompanionSpec, target_dir: &Path) -> Self {
        Self {
            program: Agent::Npm.name().to_string(),
            args: vec![
                Agent::Npm.add_subcommand().to_string(),
                Agent::Npm.dev_flag().to_string(),
                spec.install_arg(),
            ],
            cwd: target_dir.to_path_buf(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
