//! Installer agent detection.
//!
//! Walks from a directory toward the filesystem root. At each level an
//! explicit agent pin in `package.json` beats a lockfile in the same
//! directory; the first level with either wins.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use super::agent::{Agent, DetectedAgent, DetectionSource};
use crate::error::{LintweaveError, Result};

/// Lockfile signatures, checked in this order within one directory.
pub const LOCKFILES: &[(&str, Agent)] = &[
    ("pnpm-lock.yaml", Agent::Pnpm),
    ("yarn.lock", Agent::Yarn),
    ("bun.lock", Agent::Bun),
    ("bun.lockb", Agent::Bun),
    ("package-lock.json", Agent::Npm),
    ("npm-shrinkwrap.json", Agent::Npm),
];

/// Manifest file consulted at each level.
pub const MANIFEST: &str = "package.json";

static PACKAGE_MANAGER_PIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<agent>npm|yarn|pnpm|bun)@(?P<version>[^+\s]+)").unwrap()
});

/// Detects which installer agent governs a directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallerDetector;

impl InstallerDetector {
    pub fn new() -> Self {
        Self
    }

    /// Detect the agent for `cwd`, or `None` when no level up to the root
    /// identifies one.
    ///
    /// Never fails: unreadable or malformed manifests are skipped. A
    /// relative `cwd` is resolved against the process directory first.
    pub fn detect(&self, cwd: &Path) -> Option<DetectedAgent> {
        let start = std::path::absolute(cwd).unwrap_or_else(|_| cwd.to_path_buf());
        for dir in start.ancestors() {
            if let Some(detected) = Self::detect_level(dir) {
                debug!(
                    agent = %detected.agent,
                    source = %detected.source,
                    root = %detected.root.display(),
                    "Detected package installer"
                );
                return Some(detected);
            }
        }
        debug!(cwd = %cwd.display(), "No package installer detected");
        None
    }

    fn detect_level(dir: &Path) -> Option<DetectedAgent> {
        let pinned = match read_manifest_pin(&dir.join(MANIFEST)) {
            Ok(pin) => pin,
            Err(e) => {
                warn!("Ignoring manifest: {}", e);
                None
            }
        };

        let mut detected = pinned.or_else(|| {
            LOCKFILES
                .iter()
                .find(|(file, _)| dir.join(file).is_file())
                .map(|(file, agent)| {
                    DetectedAgent::new(*agent, dir, DetectionSource::Lockfile(file.to_string()))
                })
        })?;

        if let Some(marker) = detected.agent.workspace_marker() {
            if dir.join(marker).is_file() {
                detected.workspace_flags = detected
                    .agent
                    .workspace_flags()
                    .iter()
                    .map(|flag| flag.to_string())
                    .collect();
            }
        }

        Some(detected)
    }
}

/// Read the agent pin from a manifest, if the manifest exists and pins one.
///
/// `packageManager` (`"pnpm@9.1.0+sha512..."`) takes precedence over
/// `devEngines.packageManager` (an object or a list of objects with a
/// `name`).
pub fn read_manifest_pin(path: &Path) -> Result<Option<DetectedAgent>> {
    if !path.is_file() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let manifest: Value =
        serde_json::from_str(&content).map_err(|e| LintweaveError::ManifestParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let root = path.parent().unwrap_or(path);

    if let Some(pin) = manifest.get("packageManager").and_then(Value::as_str) {
        if let Some(caps) = PACKAGE_MANAGER_PIN.captures(pin) {
            if let Some(agent) = Agent::from_name(&caps["agent"]) {
                let mut detected = DetectedAgent::new(agent, root, DetectionSource::ManifestPin);
                detected.version = Some(caps["version"].to_string());
                return Ok(Some(detected));
            }
        }
        warn!(pin, "Unrecognized packageManager pin");
    }

    let dev_engine = manifest
        .get("devEngines")
        .and_then(|engines| engines.get("packageManager"));
    let candidates: Vec<&Value> = match dev_engine {
        Some(Value::Array(entries)) => entries.iter().collect(),
        Some(entry) => vec![entry],
        None => Vec::new(),
    };
    let agent = candidates
        .into_iter()
        .filter_map(|entry| entry.get("name").and_then(Value::as_str))
        .find_map(Agent::from_name);

    Ok(agent.map(|agent| DetectedAgent::new(agent, root, DetectionSource::DevEngines)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn detect(dir: &Path) -> Option<DetectedAgent> {
        InstallerDetector::new().detect(dir)
    }

    #[test]
    fn detects_each_lockfile() {
        for (file, agent) in LOCKFILES {
            let temp = TempDir::new().unwrap();
            fs::write(temp.path().join(file), "").unwrap();

            let detected = detect(temp.path()).unwrap();

            assert_eq!(detected.agent, *agent, "lockfile {}", file);
            assert_eq!(detected.source, DetectionSource::Lockfile(file.to_string()));
        }
    }

    #[test]
    fn manifest_pin_beats_lockfile_in_same_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("yarn.lock"), "").unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{"packageManager": "pnpm@9.1.0+sha512.abcdef"}"#,
        )
        .unwrap();

        let detected = detect(temp.path()).unwrap();

        assert_eq!(detected.agent, Agent::Pnpm);
        assert_eq!(detected.source, DetectionSource::ManifestPin);
        assert_eq!(detected.version.as_deref(), Some("9.1.0"));
    }

    #[test]
    fn dev_engines_names_agent() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{"devEngines": {"packageManager": [{"name": "deno"}, {"name": "bun"}]}}"#,
        )
        .unwrap();

        let detected = detect(temp.path()).unwrap();

        assert_eq!(detected.agent, Agent::Bun);
        assert_eq!(detected.source, DetectionSource::DevEngines);
    }

    #[test]
    fn walks_up_to_ancestor() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package-lock.json"), "{}").unwrap();
        let nested = temp.path().join("packages").join("web");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("package.json"), r#"{"name": "web"}"#).unwrap();

        let detected = detect(&nested).unwrap();

        assert_eq!(detected.agent, Agent::Npm);
        assert_eq!(detected.root, temp.path());
    }

    #[test]
    fn nearer_level_wins_over_ancestor_pin() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{"packageManager": "yarn@4.0.0"}"#,
        )
        .unwrap();
        let nested = temp.path().join("tools");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("bun.lock"), "").unwrap();

        assert_eq!(detect(&nested).unwrap().agent, Agent::Bun);
    }

    #[test]
    fn workspace_marker_adds_flags_for_pnpm() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pnpm-lock.yaml"), "").unwrap();
        fs::write(temp.path().join("pnpm-workspace.yaml"), "packages: []").unwrap();

        let detected = detect(temp.path()).unwrap();

        assert_eq!(detected.workspace_flags, vec!["-w"]);
        assert!(detected.is_workspace_install());
    }

    #[test]
    fn no_workspace_flags_without_marker() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pnpm-lock.yaml"), "").unwrap();

        let detected = detect(temp.path()).unwrap();

        assert!(detected.workspace_flags.is_empty());
    }

    #[test]
    fn marker_ignored_for_other_agents() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("yarn.lock"), "").unwrap();
        fs::write(temp.path().join("pnpm-workspace.yaml"), "").unwrap();

        assert!(detect(temp.path()).unwrap().workspace_flags.is_empty());
    }

    #[test]
    fn malformed_manifest_falls_back_to_lockfile() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{ not json").unwrap();
        fs::write(temp.path().join("yarn.lock"), "").unwrap();

        assert_eq!(detect(temp.path()).unwrap().agent, Agent::Yarn);
    }

    #[test]
    fn read_manifest_pin_reports_parse_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_manifest_pin(&path).unwrap_err();

        assert!(matches!(err, LintweaveError::ManifestParse { .. }));
    }
}
