//! Fallback fragment synthesis.

use std::sync::Arc;

use serde_json::json;
use sha2::{Digest, Sha256};
use tracing::debug;

use super::rule::{MissingCompanionRule, MISSING_MODULE_RULE};
use crate::fragment::{Fragment, LanguageBinding, PluginBinding, RuleSetting};
use crate::lint::{RuleId, RuleRegistry};

/// Where a fallback fragment stands in for the fragments it replaces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FallbackAnchor {
    /// Name of the fallback fragment; usually the setup fragment the
    /// producer would have emitted, so edits keyed on it still apply.
    pub name: Option<String>,
    /// Files the degraded feature would have covered.
    pub files: Vec<String>,
    /// Language binding the degraded feature would have used.
    pub language: Option<LanguageBinding>,
}

impl FallbackAnchor {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_language(mut self, language: LanguageBinding) -> Self {
        self.language = Some(language);
        self
    }
}

/// Plugin that carries the missing-companion rule.
pub struct FallbackPlugin {
    namespace: String,
    rules: RuleRegistry,
}

impl FallbackPlugin {
    pub fn new(namespace: impl Into<String>) -> Self {
        let mut rules = RuleRegistry::new();
        rules.register(Box::new(MissingCompanionRule));
        Self {
            namespace: namespace.into(),
            rules,
        }
    }
}

impl PluginBinding for FallbackPlugin {
    fn source(&self) -> &str {
        &self.namespace
    }

    fn rules(&self) -> Option<&RuleRegistry> {
        Some(&self.rules)
    }
}

/// Plugin namespace for a missing set.
///
/// Derived from the names alone, so the same set always maps to the same
/// namespace. Distinct sets share one only on a 64-bit hash collision,
/// which is improbable but not impossible.
pub fn fallback_namespace(missing: &[String]) -> String {
    let mut hasher = Sha256::new();
    for name in missing {
        hasher.update(name.as_bytes());
        hasher.update([0u8]);
    }
    let result = hasher.finalize();
    format!("missing-companion-{}", hex::encode(&result[..8]))
}

/// Build the single fragment that replaces a degraded producer's output.
///
/// The fragment binds a [`FallbackPlugin`] and enables its
/// missing-companion rule with the full missing list as its option.
pub fn build_fallback(missing: &[String], anchor: &FallbackAnchor) -> Vec<Fragment> {
    let namespace = fallback_namespace(missing);
    let name = anchor
        .name
        .clone()
        .unwrap_or_else(|| format!("lintweave/{}", namespace));
    debug!(fragment = %name, missing = ?missing, "Building fallback fragment");

    let rule_id = RuleId::new(MISSING_MODULE_RULE).qualified(&namespace);
    let plugin: Arc<dyn PluginBinding> = Arc::new(FallbackPlugin::new(namespace.clone()));

    let mut fragment = Fragment::new(name)
        .with_files(anchor.files.iter().cloned())
        .with_plugin(namespace, plugin)
        .with_rule(rule_id, RuleSetting::error().with_option(json!(missing)));
    fragment.language = anchor.language.clone();

    vec![fragment]
}
