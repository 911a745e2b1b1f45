//! Configuration fragments.
//!
//! A [`Fragment`] is a named, partial unit of lint configuration: which
//! files it applies to, which it ignores, which plugins it binds, which
//! parser handles the files, and which rules it sets.
//!
//! - [`types`] - Fragment, rule settings, language bindings
//! - [`plugin`] - Plugin bindings and the injected loader
//! - [`merge`] - Override/merge semantics
//!
//! # Example
//!
//! ```
//! use lintweave::fragment::{merge_fragment, Fragment, RuleSetting};
//!
//! let base = Fragment::new("lintweave/javascript/rules")
//!     .with_rule("no-var", RuleSetting::error());
//! let patch = Fragment::default().with_rule("no-var", RuleSetting::off());
//!
//! let merged = merge_fragment(&base, &patch);
//! assert_eq!(merged.rules["no-var"], RuleSetting::off());
//! ```

pub mod merge;
pub mod plugin;
pub mod types;

pub use merge::{deep_merge, merge_fragment, merge_fragments};
pub use plugin::{ExternalPlugin, PackagePluginLoader, PluginBinding, PluginLoader};
pub use types::{Fragment, FragmentSpec, LanguageBinding, RuleSetting};
