//! Options file discovery and loading.
//!
//! The options file is looked up from the project directory toward the
//! filesystem root. A `lintweave.local.yml` next to it (for settings that
//! are not committed) is layered on top.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively
//! - `ignores` sequences are concatenated (base first)
//! - Other sequences are replaced entirely
//! - `null` in the overlay deletes the key from the base

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::debug;

use super::options::ConfigOptions;
use crate::error::{LintweaveError, Result};

/// Options file names, checked in this order in each directory.
pub const OPTIONS_FILES: &[&str] = &["lintweave.yml", ".lintweave.yml"];

/// Uncommitted overlay read from the options file's directory.
pub const LOCAL_OPTIONS_FILE: &str = "lintweave.local.yml";

/// Options files that apply to a project, in merge order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionsPaths {
    pub project: Option<PathBuf>,
    pub local: Option<PathBuf>,
}

impl OptionsPaths {
    /// Discover the options files for `start`.
    pub fn discover(start: &Path) -> Self {
        let project = find_options_file(start);
        let local_dir = project
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(start);
        let local = Some(local_dir.join(LOCAL_OPTIONS_FILE)).filter(|p| p.is_file());
        Self { project, local }
    }

    /// Existing files in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.local.iter()).collect()
    }

    /// Directory the options apply to: where the options file lives.
    pub fn root(&self) -> Option<&Path> {
        self.project.as_deref().and_then(Path::parent)
    }
}

/// Find the nearest options file at or above `start`.
pub fn find_options_file(start: &Path) -> Option<PathBuf> {
    let start = std::path::absolute(start).unwrap_or_else(|_| start.to_path_buf());
    start.ancestors().find_map(|dir| {
        OPTIONS_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// Load one options file as raw YAML, for merging.
pub fn load_options_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Value::Mapping(Default::default()));
    }
    serde_yaml::from_str(&content).map_err(|e| LintweaveError::OptionsParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Deep merge two option documents.
pub fn merge_options(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                    continue;
                }
                let merged = match (base_map.get(key), overlay_value) {
                    (Some(Value::Sequence(base_seq)), Value::Sequence(overlay_seq))
                        if key.as_str() == Some("ignores") =>
                    {
                        Value::Sequence(base_seq.iter().chain(overlay_seq).cloned().collect())
                    }
                    (Some(base_value), _) => merge_options(base_value, overlay_value),
                    (None, _) => overlay_value.clone(),
                };
                result.insert(key.clone(), merged);
            }

            Value::Mapping(result)
        }
        (_, overlay) => overlay.clone(),
    }
}

/// Parse a merged document into validated options.
pub fn parse_options(value: Value, source: &Path) -> Result<ConfigOptions> {
    let options: ConfigOptions =
        serde_yaml::from_value(value).map_err(|e| LintweaveError::OptionsParse {
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;
    options.validate()?;
    Ok(options)
}

/// Options for a project, with the file they came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedOptions {
    pub options: ConfigOptions,
    /// The options file, if one was found.
    pub path: Option<PathBuf>,
}

/// Load the options for `project_root`.
///
/// With `config_override`, only that file is read. Otherwise the discovered
/// options file and its local overlay are merged. No file at all yields
/// default options: every feature auto-detected.
pub fn load_options(project_root: &Path, config_override: Option<&Path>) -> Result<LoadedOptions> {
    if let Some(path) = config_override {
        let value = load_options_value(path)?;
        return Ok(LoadedOptions {
            options: parse_options(value, path)?,
            path: Some(path.to_path_buf()),
        });
    }

    let paths = OptionsPaths::discover(project_root);
    let existing = paths.all_existing();
    let Some(source) = existing.first().map(|p| p.to_path_buf()) else {
        debug!(root = %project_root.display(), "No options file found, using defaults");
        return Ok(LoadedOptions::default());
    };

    let mut merged = Value::Mapping(Default::default());
    for path in &existing {
        debug!(path = %path.display(), "Loading options");
        merged = merge_options(&merged, &load_options_value(path)?);
    }

    Ok(LoadedOptions {
        options: parse_options(merged, &source)?,
        path: paths.project.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::RuleSetting;
    use tempfile::TempDir;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn merge_concatenates_ignores() {
        let merged = merge_options(&yaml("ignores: [a]\nrules: { x: error }"), &yaml("ignores: [b]"));

        assert_eq!(merged, yaml("ignores: [a, b]\nrules: { x: error }"));
    }

    #[test]
    fn merge_replaces_other_sequences_and_deletes_null() {
        let merged = merge_options(
            &yaml("fragments: [{ name: a }]\nyaml: true\nrules: { x: error, y: warn }"),
            &yaml("fragments: [{ name: b }]\nyaml: ~\nrules: { y: off }"),
        );

        assert_eq!(
            merged,
            yaml("fragments: [{ name: b }]\nrules: { x: error, y: off }")
        );
    }

    #[test]
    fn finds_options_file_in_ancestor() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".lintweave.yml"), "typescript: true").unwrap();
        let nested = temp.path().join("packages").join("app");
        fs::create_dir_all(&nested).unwrap();

        let paths = OptionsPaths::discover(&nested);

        assert_eq!(paths.project, Some(temp.path().join(".lintweave.yml")));
        assert_eq!(paths.root(), Some(temp.path()));
    }

    #[test]
    fn local_overlay_is_merged() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("lintweave.yml"),
            "ignores: [dist/**]\nrules:\n  no-console: error\n",
        )
        .unwrap();
        fs::write(
            temp.path().join(LOCAL_OPTIONS_FILE),
            "ignores: [scratch/**]\nrules:\n  no-console: off\n",
        )
        .unwrap();

        let loaded = load_options(temp.path(), None).unwrap();

        assert_eq!(loaded.options.ignores, vec!["dist/**", "scratch/**"]);
        assert_eq!(loaded.options.rules["no-console"], RuleSetting::off());
        assert_eq!(loaded.path, Some(temp.path().join("lintweave.yml")));
    }

    #[test]
    fn no_options_file_yields_defaults() {
        let temp = TempDir::new().unwrap();

        let loaded = load_options(temp.path(), None).unwrap();

        assert!(loaded.path.is_none());
        assert!(loaded.options.fragments.is_empty());
    }

    #[test]
    fn empty_file_is_empty_options() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("lintweave.yml"), "").unwrap();

        assert!(load_options(temp.path(), None).is_ok());
    }

    #[test]
    fn parse_errors_name_the_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lintweave.yml");
        fs::write(&path, "typescript: [unclosed").unwrap();

        let err = load_options(temp.path(), None).unwrap_err();

        assert!(matches!(err, LintweaveError::OptionsParse { .. }));
        assert!(err.to_string().contains("lintweave.yml"));
    }

    #[test]
    fn override_path_skips_discovery() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("lintweave.yml"), "yaml: true").unwrap();
        let custom = temp.path().join("ci.yml");
        fs::write(&custom, "yaml: false").unwrap();

        let loaded = load_options(temp.path(), Some(&custom)).unwrap();

        assert_eq!(loaded.path, Some(custom));
        assert!(loaded.options.yaml.unwrap().settings().is_none());
    }

    #[test]
    fn invalid_options_are_rejected_after_merge() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("lintweave.yml"), "files: ['**/*.js']").unwrap();

        let err = load_options(temp.path(), None).unwrap_err();

        assert!(matches!(err, LintweaveError::InvalidOptions { .. }));
    }
}
