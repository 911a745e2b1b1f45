//! Probe, then produce or fall back.

use std::future::Future;
use std::sync::Arc;

use tracing::debug;

use super::resolver::CompanionResolver;
use crate::error::Result;
use crate::fragment::Fragment;

/// Dispatches a fragment producer or its fallback depending on whether the
/// producer's companions resolve.
///
/// Results are never cached: every call re-checks, since an install
/// between two calls may have changed what resolves.
#[derive(Clone)]
pub struct CapabilityProbe {
    resolver: Arc<dyn CompanionResolver>,
}

impl CapabilityProbe {
    pub fn new(resolver: Arc<dyn CompanionResolver>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &Arc<dyn CompanionResolver> {
        &self.resolver
    }

    /// Names from `required` that do not resolve, in their given order.
    pub fn missing(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|name| !self.resolver.is_resolvable(name))
            .map(|name| name.to_string())
            .collect()
    }

    /// Run `producer` when every companion resolves, `fallback(missing)`
    /// otherwise. Exactly one of the two runs.
    ///
    /// Errors from either side propagate unchanged.
    pub async fn require_of<P, PF, F, FF>(
        &self,
        required: &[&str],
        producer: P,
        fallback: F,
    ) -> Result<Vec<Fragment>>
    where
        P: FnOnce() -> PF,
        PF: Future<Output = Result<Vec<Fragment>>>,
        F: FnOnce(Vec<String>) -> FF,
        FF: Future<Output = Result<Vec<Fragment>>>,
    {
        let missing = self.missing(required);
        if missing.is_empty() {
            debug!(companions = ?required, "Companions resolved");
            producer().await
        } else {
            debug!(missing = ?missing, "Companions missing, using fallback");
            fallback(missing).await
        }
    }
}
