//! Fallback fragments for degraded producers.
//!
//! When a producer's companions do not resolve, the probe substitutes one
//! synthetic fragment whose only rule reports what is missing and, when the
//! run allows repairs, installs it.

pub mod build;
pub mod rule;

pub use build::{build_fallback, fallback_namespace, FallbackAnchor, FallbackPlugin};
pub use rule::{MissingCompanionRule, MISSING_MODULE_RULE};
