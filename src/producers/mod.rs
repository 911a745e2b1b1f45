//! Built-in fragment producers.
//!
//! One producer per feature area. Producers without companions return their
//! fragments directly; the rest go through the [`CapabilityProbe`] and
//! degrade to a fallback fragment when a companion is missing.
//!
//! | producer     | companions |
//! |--------------|------------|
//! | `ignores`    | none |
//! | `gitignore`  | none |
//! | `javascript` | none |
//! | `imports`    | `eslint-plugin-import-lite` |
//! | `typescript` | `@typescript-eslint/parser`, `@typescript-eslint/eslint-plugin` |
//! | `jsonc`      | `eslint-plugin-jsonc`, `jsonc-eslint-parser` |
//! | `yaml`       | `eslint-plugin-yml`, `yaml-eslint-parser` |
//! | `toml`       | `eslint-plugin-toml`, `toml-eslint-parser` |
//! | `markdown`   | `@eslint/markdown` |
//! | `formatters` | `eslint-plugin-format` |

pub mod formatters;
pub mod gitignore;
pub mod globs;
pub mod ignores;
pub mod imports;
pub mod javascript;
pub mod jsonc;
pub mod markdown;
pub mod toml;
pub mod typescript;
pub mod yaml;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::Result;
use crate::fallback::{build_fallback, FallbackAnchor};
use crate::fragment::{Fragment, PackagePluginLoader, PluginLoader, RuleSetting};
use crate::probe::{CapabilityProbe, CompanionResolver, NodeModulesResolver};

pub use formatters::formatters;
pub use gitignore::{gitignore, gitignore_to_globs};
pub use ignores::ignores;
pub use imports::imports;
pub use javascript::javascript;
pub use jsonc::jsonc;
pub use markdown::markdown;
pub use toml::toml;
pub use typescript::typescript;
pub use yaml::yaml;

/// What every producer may consult.
#[derive(Clone)]
pub struct ProducerContext {
    /// Project directory the configuration is composed for.
    pub cwd: PathBuf,
    pub probe: CapabilityProbe,
    pub loader: Arc<dyn PluginLoader>,
}

impl ProducerContext {
    pub fn new(cwd: impl Into<PathBuf>, probe: CapabilityProbe, loader: Arc<dyn PluginLoader>) -> Self {
        Self {
            cwd: cwd.into(),
            probe,
            loader,
        }
    }

    /// Context resolving companions from the project's `node_modules`.
    pub fn for_project(cwd: impl Into<PathBuf>) -> Self {
        let cwd = cwd.into();
        let resolver: Arc<dyn CompanionResolver> = Arc::new(NodeModulesResolver::new(cwd.clone()));
        Self::new(
            cwd,
            CapabilityProbe::new(resolver.clone()),
            Arc::new(PackagePluginLoader::new(resolver)),
        )
    }
}

/// Per-feature customization from the options file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureSettings {
    /// Replaces the feature's default file globs.
    pub files: Option<Vec<String>>,
    /// Rule settings merged over the feature's rules fragment.
    pub overrides: BTreeMap<String, RuleSetting>,
}

impl FeatureSettings {
    /// The configured globs, or `defaults`.
    pub fn files_or(&self, defaults: &[&str]) -> Vec<String> {
        self.files
            .clone()
            .unwrap_or_else(|| globs::owned(defaults))
    }
}

/// Fallback anchor for a feature: named after its setup fragment so edits
/// keyed on that name keep working when the feature degrades.
pub fn setup_anchor(feature: &str, files: Vec<String>) -> FallbackAnchor {
    FallbackAnchor::named(format!("lintweave/{}/setup", feature)).with_files(files)
}

/// Probe `required`, then build the feature with `produce` or fall back.
pub async fn with_companions<P>(
    ctx: &ProducerContext,
    required: &[&str],
    anchor: FallbackAnchor,
    produce: P,
) -> Result<Vec<Fragment>>
where
    P: FnOnce() -> Result<Vec<Fragment>>,
{
    ctx.probe
        .require_of(
            required,
            || async move { produce() },
            |missing| async move { Ok(build_fallback(&missing, &anchor)) },
        )
        .await
}
