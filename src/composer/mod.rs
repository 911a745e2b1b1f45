//! Fragment composition.
//!
//! The [`Composer`] collects ordered batches of fragments (resolved or
//! pending), queues structural edits keyed by fragment name, and flattens
//! everything into the ordered list the host engine consumes.
//!
//! Output order is load-bearing: for overlapping `files`, later fragments
//! win per rule in the host engine. The composer therefore never reorders
//! existing entries and inserts relative to named anchors rather than
//! indices.
//!
//! # Example
//!
//! ```
//! use futures::executor::block_on;
//! use lintweave::composer::{Batch, Composer};
//! use lintweave::fragment::Fragment;
//!
//! let mut composer = Composer::new();
//! composer
//!     .append([Batch::pending(async { Ok(vec![Fragment::new("a")]) })])
//!     .append([Fragment::new("c")])
//!     .insert_after("a", [Fragment::new("b")]);
//!
//! let fragments = block_on(composer.flatten()).unwrap();
//! let names: Vec<_> = fragments.iter().map(|f| f.name.as_str()).collect();
//! assert_eq!(names, ["a", "b", "c"]);
//! ```

pub mod batch;
pub mod compose;

pub use batch::Batch;
pub use compose::Composer;
