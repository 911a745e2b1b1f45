//! Capability-aware fragment loading.
//!
//! A producer that depends on optional companion packages declares them
//! up front; the [`CapabilityProbe`] checks they resolve and runs either
//! the producer or a fallback that reports what is missing. This is the
//! only place a missing dependency becomes a soft condition.
//!
//! - [`resolver`] - Existence checks against the module graph
//! - [`require`] - The probe itself

pub mod require;
pub mod resolver;

pub use require::CapabilityProbe;
pub use resolver::{CompanionResolver, KnownCompanions, NodeModulesResolver};
