//! Companion resolution.
//!
//! Resolution is an existence check against the host project's module
//! graph. Nothing is loaded, so a half-installed companion cannot crash
//! the composition.

use std::collections::HashSet;
use std::path::PathBuf;

/// Answers whether a companion package resolves for the host project.
pub trait CompanionResolver: Send + Sync {
    /// Location of the companion's package directory, if it resolves.
    fn locate(&self, name: &str) -> Option<PathBuf>;

    /// Whether the companion resolves.
    fn is_resolvable(&self, name: &str) -> bool {
        self.locate(name).is_some()
    }
}

/// Resolves packages the way Node does: `node_modules/<name>` in the base
/// directory and then in every ancestor.
#[derive(Debug, Clone)]
pub struct NodeModulesResolver {
    base: PathBuf,
}

impl NodeModulesResolver {
    /// A relative `base` is resolved against the process directory.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            base: std::path::absolute(&base).unwrap_or(base),
        }
    }
}

impl CompanionResolver for NodeModulesResolver {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }
        self.base
            .ancestors()
            .map(|dir| dir.join("node_modules").join(name))
            .find(|candidate| candidate.join("package.json").is_file())
    }
}

/// A fixed set of companions that resolve.
///
/// Useful wherever the module graph is known up front, such as tests and
/// dry runs.
#[derive(Debug, Clone, Default)]
pub struct KnownCompanions {
    names: HashSet<String>,
}

impl KnownCompanions {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Mark another companion as resolvable.
    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }
}

impl CompanionResolver for KnownCompanions {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        self.names
            .contains(name)
            .then(|| PathBuf::from("node_modules").join(name))
    }
}
