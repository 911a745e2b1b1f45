//! Lintweave - Composable lint configuration with self-healing companions.
//!
//! Lintweave assembles an ordered list of lint configuration fragments from
//! declarative options. Features that depend on companion packages degrade
//! to a fallback fragment when a companion is missing, and that fragment's
//! diagnostic can install it.
//!
//! # Modules
//!
//! - [`assembler`] - Options loading and producer ordering
//! - [`cli`] - Command-line interface and argument parsing
//! - [`composer`] - Ordered fragment composition with deferred edits
//! - [`error`] - Error types and result aliases
//! - [`fallback`] - Fallback fragments for missing companions
//! - [`fragment`] - Fragment values, plugin bindings, and merging
//! - [`installer`] - Package manager detection and companion installs
//! - [`lint`] - Locally implemented rules and diagnostic output
//! - [`probe`] - Companion resolution and the capability probe
//! - [`producers`] - Built-in fragment producers
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use futures::executor::block_on;
//! use lintweave::composer::Composer;
//! use lintweave::fragment::Fragment;
//!
//! let mut composer = Composer::new();
//! composer
//!     .append([Fragment::new("base")])
//!     .append([Fragment::new("overrides")])
//!     .insert_after("base", [Fragment::new("plugins")]);
//!
//! let names: Vec<String> = block_on(composer.flatten())
//!     .unwrap()
//!     .into_iter()
//!     .map(|f| f.name)
//!     .collect();
//! assert_eq!(names, ["base", "plugins", "overrides"]);
//! ```

pub mod assembler;
pub mod cli;
pub mod composer;
pub mod error;
pub mod fallback;
pub mod fragment;
pub mod installer;
pub mod lint;
pub mod probe;
pub mod producers;
pub mod ui;

pub use error::{LintweaveError, Result};
