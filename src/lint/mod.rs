//! Rules, diagnostics, and diagnostic output.
//!
//! Composed fragments enable rules by `namespace/rule-id`. Most of those
//! rules live in the host engine; the ones this crate implements itself
//! (the synthetic missing-companion diagnostic) go through this module:
//!
//! - **Rules** - Locally implemented checks ([`LintRule`] trait)
//! - **Registry** - A plugin's rule table ([`RuleRegistry`])
//! - **Diagnostics** - Findings with severity and location ([`LintDiagnostic`])
//!
//! # Example
//!
//! ```
//! use lintweave::lint::{RuleRegistry, RuleId, Severity};
//!
//! let registry = RuleRegistry::new();
//! assert!(registry.get(&RuleId::new("nonexistent")).is_none());
//!
//! assert!(Severity::Off < Severity::Warn);
//! assert!(Severity::Warn < Severity::Error);
//! ```

pub mod diagnostic;
pub mod output;
pub mod registry;
pub mod rule;
pub mod run;
pub mod span;

pub use diagnostic::LintDiagnostic;
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat};
pub use registry::RuleRegistry;
pub use rule::{LintRule, RuleContext, RuleId, Severity};
pub use run::{run_local_rules, RunSettings};
pub use span::Span;
