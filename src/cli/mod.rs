//! Command-line interface for Runway.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    AddArgs, Cli, Commands, EditorsCommand, LaunchArgs, ListArgs, OpenArgs, RemoveArgs, RenameArgs,
    ShowArgs, TagsArgs,
};
pub use commands::{Command, CommandContext, CommandDispatcher, CommandResult};
