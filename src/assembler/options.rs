//! Options accepted by the assembler.
//!
//! # Example
//!
//! ```yaml
//! name: acme/lint
//! ignores:
//!   - generated/**
//! rules:
//!   no-console: off
//! typescript: true
//! yaml:
//!   files: ["config/**/*.yml"]
//!   overrides:
//!     yaml/quotes: off
//! markdown: false
//! fragments:
//!   - files: ["scripts/**"]
//!     rules:
//!       no-console: off
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{LintweaveError, Result};
use crate::fragment::{FragmentSpec, RuleSetting};
use crate::producers::FeatureSettings;

/// Top-level options document.
///
/// Every feature toggle left unset is auto-detected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOptions {
    /// Name of the fragment carrying `ignores` and `rules`.
    pub name: Option<String>,
    /// Extra global ignores.
    pub ignores: Vec<String>,
    /// Rule settings applied after every built-in fragment.
    pub rules: BTreeMap<String, RuleSetting>,

    pub gitignore: Option<Feature>,
    pub javascript: Option<Feature>,
    pub imports: Option<Feature>,
    pub typescript: Option<Feature>,
    pub jsonc: Option<Feature>,
    pub yaml: Option<Feature>,
    pub toml: Option<Feature>,
    pub markdown: Option<Feature>,
    pub formatters: Option<Feature>,

    /// Fragments appended after all built-ins, in order.
    pub fragments: Vec<FragmentSpec>,

    /// Not supported; present so [`validate`](Self::validate) can reject it.
    pub files: Option<serde_yaml::Value>,
}

impl ConfigOptions {
    /// Reject options that parse but cannot be honored.
    pub fn validate(&self) -> Result<()> {
        if self.files.is_some() {
            return Err(LintweaveError::InvalidOptions {
                message: "top-level `files` is not supported; put file globs on an entry of `fragments`"
                    .to_string(),
            });
        }
        if matches!(self.javascript, Some(Feature::Enabled(false))) {
            return Err(LintweaveError::InvalidOptions {
                message: "`javascript` cannot be disabled".to_string(),
            });
        }
        Ok(())
    }

    /// Whether the passthrough bag has anything to contribute.
    pub fn has_passthrough(&self) -> bool {
        self.name.is_some() || !self.ignores.is_empty() || !self.rules.is_empty()
    }
}

/// A feature toggle: a plain switch, or settings (which imply enabled).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Feature {
    Enabled(bool),
    Configured(FeatureConfig),
}

impl Feature {
    /// Settings for an enabled feature, `None` when switched off.
    pub fn settings(&self) -> Option<FeatureSettings> {
        match self {
            Feature::Enabled(false) => None,
            Feature::Enabled(true) => Some(FeatureSettings::default()),
            Feature::Configured(config) => Some(FeatureSettings {
                files: config.files.clone(),
                overrides: config.overrides.clone(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeatureConfig {
    pub files: Option<Vec<String>>,
    pub overrides: BTreeMap<String, RuleSetting>,
}
