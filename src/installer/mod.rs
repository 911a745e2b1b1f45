//! Installer detection and companion installation.
//!
//! When repair is enabled, the missing-companion diagnostic asks the
//! [`Installer`] to add each companion using whatever tool already governs
//! the project.
//!
//! # Modules
//!
//! - [`agent`] - Known agents and the commands they run
//! - [`detect`] - Lockfile / manifest / workspace-marker detection
//! - [`spec`] - `name@version` parsing
//! - [`registry`] - Per-run record of attempted installs
//! - [`runner`] - Blocking process invocation
//! - [`install`] - The installer itself
//!
//! # Example
//!
//! ```
//! use lintweave::installer::{Agent, InstallerDetector};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("pnpm-lock.yaml"), "").unwrap();
//! fs::write(temp.path().join("pnpm-workspace.yaml"), "packages: []").unwrap();
//!
//! let detected = InstallerDetector::new().detect(temp.path()).unwrap();
//! assert_eq!(detected.agent, Agent::Pnpm);
//! assert_eq!(detected.workspace_flags, vec!["-w"]);
//! ```

pub mod agent;
pub mod detect;
pub mod install;
pub mod registry;
pub mod runner;
pub mod spec;

pub use agent::{Agent, DetectedAgent, DetectionSource, Invocation};
pub use detect::{read_manifest_pin, InstallerDetector, LOCKFILES, MANIFEST};
pub use install::Installer;
pub use registry::InstallAttemptRegistry;
pub use runner::{CommandOutcome, CommandRunner, SystemRunner};
pub use spec::CompanionSpec;
