//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command receives the same
//! [`CommandContext`]: the resolved store location and configuration.

pub mod add;
pub mod completions;
pub mod context;
pub mod dispatcher;
pub mod editors;
pub mod launch;
pub mod list;
pub mod open;
pub mod remove;
pub mod rename;
pub mod show;
pub mod tags;

pub use context::CommandContext;
pub use dispatcher::{
    exit_code_for, report_failure, Command, CommandDispatcher, CommandResult, EXIT_FAILURE,
    EXIT_USAGE,
};
