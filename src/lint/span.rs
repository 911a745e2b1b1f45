//! Source location spans.

use std::path::PathBuf;

/// A source location span representing a range in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// File path.
    pub file: PathBuf,
    /// Starting line (1-indexed).
    pub start_line: usize,
    /// Starting column (1-indexed).
    pub start_col: usize,
    /// Ending line (1-indexed).
    pub end_line: usize,
    /// Ending column (1-indexed).
    pub end_col: usize,
}

impl Span {
    /// Create a zero-width span at the very start of a file.
    ///
    /// Diagnostics that are about the configuration rather than the file's
    /// content use this location.
    pub fn start_of_file(file: impl Into<PathBuf>) -> Self {
        Self::new(file, 1, 1, 1, 1)
    }

    /// Create a span with precise positions.
    pub fn new(
        file: impl Into<PathBuf>,
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> Self {
        Self {
            file: file.into(),
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }
}
