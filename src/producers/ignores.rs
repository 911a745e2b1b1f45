//! Global ignores.

use super::globs::{owned, GLOB_EXCLUDE};
use crate::fragment::Fragment;

/// One ignore-only fragment with the built-in exclusions.
///
/// Project-specific ignores travel in the options' passthrough fragment.
pub fn ignores() -> Vec<Fragment> {
    vec![Fragment::new("lintweave/ignores").with_ignores(owned(GLOB_EXCLUDE))]
}
