//! Terminal output for the CLI.
//!
//! This module provides:
//! - [`UserInterface`] trait so commands can be tested without a terminal
//! - [`TerminalUI`] for real runs
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use lintweave::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Composed 4 fragments");
//! assert!(ui.has_success("4 fragments"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, Theme};

/// Trait for user interface interactions.
pub trait UserInterface {
    /// Current verbosity.
    fn output_mode(&self) -> OutputMode;

    /// Print a result line (never suppressed).
    fn message(&mut self, msg: &str);

    /// Print a success status line.
    fn success(&mut self, msg: &str);

    /// Print a warning.
    fn warning(&mut self, msg: &str);

    /// Print an error.
    fn error(&mut self, msg: &str);

    /// Whether diagnostics should be colored.
    fn colors_enabled(&self) -> bool {
        false
    }
}
