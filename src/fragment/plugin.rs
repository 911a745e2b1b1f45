//! Plugin bindings and loading.
//!
//! A fragment binds plugin namespaces to [`PluginBinding`]s. Bindings are
//! produced by an injected [`PluginLoader`] rather than loaded ambiently, so
//! producers stay testable without companion packages installed.

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::{LintweaveError, Result};
use crate::lint::{LintRule, RuleId, RuleRegistry};
use crate::probe::CompanionResolver;

/// A plugin bound into a fragment under some namespace.
pub trait PluginBinding: Send + Sync {
    /// Where the plugin comes from: a package name or a synthetic identity.
    fn source(&self) -> &str;

    /// Rule table of rules implemented in this crate, if any.
    fn rules(&self) -> Option<&RuleRegistry> {
        None
    }

    /// Look up a locally implemented rule by ID.
    fn rule(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules()?.get(id)
    }
}

/// A plugin implemented by a companion package; its rules run in the host
/// engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalPlugin {
    pub package: String,
    pub location: PathBuf,
}

impl PluginBinding for ExternalPlugin {
    fn source(&self) -> &str {
        &self.package
    }
}

/// Produces plugin bindings for companion packages.
pub trait PluginLoader: Send + Sync {
    /// Load the plugin exported by `package`.
    ///
    /// Only called after the capability probe confirmed the package
    /// resolves; a failure here is a producer error.
    fn load(&self, package: &str) -> Result<Arc<dyn PluginBinding>>;
}

/// Loader that binds companions by their resolved package location.
pub struct PackagePluginLoader {
    resolver: Arc<dyn CompanionResolver>,
}

impl PackagePluginLoader {
    pub fn new(resolver: Arc<dyn CompanionResolver>) -> Self {
        Self { resolver }
    }
}

impl PluginLoader for PackagePluginLoader {
    fn load(&self, package: &str) -> Result<Arc<dyn PluginBinding>> {
        let location = self
            .resolver
            .locate(package)
            .ok_or_else(|| LintweaveError::PluginLoad {
                package: package.to_string(),
                message: "package does not resolve".to_string(),
            })?;
        Ok(Arc::new(ExternalPlugin {
            package: package.to_string(),
            location,
        }))
    }
}
