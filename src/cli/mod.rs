//! Command-line interface for lintweave.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    CheckArgs, Cli, Commands, CompletionsArgs, ComposeArgs, ComposeFormat, DetectArgs, InstallArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
