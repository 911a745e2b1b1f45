//! Turning options into a composed configuration.
//!
//! The assembler decides which producers run, in a fixed order, and hands
//! their batches to a [`Composer`](crate::composer::Composer).
//!
//! - [`options`] - The options document
//! - [`loader`] - Options file discovery and layering
//! - [`define`] - Producer selection and ordering
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use futures::executor::block_on;
//! use lintweave::assembler::{assemble, ConfigOptions};
//! use lintweave::fragment::PackagePluginLoader;
//! use lintweave::probe::{CapabilityProbe, KnownCompanions};
//! use lintweave::producers::ProducerContext;
//!
//! let resolver = Arc::new(KnownCompanions::default());
//! let ctx = ProducerContext::new(
//!     std::env::temp_dir(),
//!     CapabilityProbe::new(resolver.clone()),
//!     Arc::new(PackagePluginLoader::new(resolver)),
//! );
//! let options: ConfigOptions = serde_yaml::from_str("gitignore: false").unwrap();
//!
//! let fragments = block_on(assemble(options, &ctx)).unwrap();
//! assert_eq!(fragments[0].name, "lintweave/ignores");
//! ```

pub mod define;
pub mod loader;
pub mod options;

pub use define::{assemble, define_config, USER_OPTIONS_FRAGMENT};
pub use loader::{
    find_options_file, load_options, merge_options, LoadedOptions, OptionsPaths,
    LOCAL_OPTIONS_FILE, OPTIONS_FILES,
};
pub use options::{ConfigOptions, Feature, FeatureConfig};
