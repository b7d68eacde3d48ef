//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, EditorsCommand, ListArgs};
use crate::error::{Result, RunwayError};
use crate::ui::UserInterface;

use super::context::CommandContext;

/// Exit code for an operation that was attempted and failed.
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for bad input: unknown project, missing folder, invalid name.
pub const EXIT_USAGE: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// Errors that the user can act on are reported through `ui` and turned
    /// into a failed [`CommandResult`]; anything else is returned.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Exit code that `err` maps to.
pub fn exit_code_for(err: &RunwayError) -> i32 {
    match err {
        RunwayError::ProjectNotFound { .. }
        | RunwayError::EditorFolderNotFound { .. }
        | RunwayError::FolderNotFound { .. }
        | RunwayError::InvalidName { .. }
        | RunwayError::InvalidPath { .. } => EXIT_USAGE,
        _ => EXIT_FAILURE,
    }
}

/// Report `err` through `ui` and return the matching failed result.
pub fn report_failure(ui: &mut dyn UserInterface, err: RunwayError) -> CommandResult {
    ui.error(&err.to_string());
    CommandResult::failure(exit_code_for(&err))
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &CommandContext {
        &self.context
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = &self.context;
        match &cli.command {
            Some(Commands::List(args)) => super::list::ListCommand::new(ctx, args.clone()).execute(ui),
            Some(Commands::Add(args)) => super::add::AddCommand::new(ctx, args.clone()).execute(ui),
            Some(Commands::Remove(args)) => {
                super::remove::RemoveCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Rename(args)) => {
                super::rename::RenameCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Tags(args)) => super::tags::TagsCommand::new(ctx, args.clone()).execute(ui),
            Some(Commands::Open(args)) => super::open::OpenCommand::new(ctx, args.clone()).execute(ui),
            Some(Commands::Launch(args)) => {
                super::launch::LaunchCommand::new(args.clone()).execute(ui)
            }
            Some(Commands::Show(args)) => super::show::ShowCommand::new(args.clone()).execute(ui),
            Some(Commands::Editors(sub)) => match sub {
                EditorsCommand::List(args) => {
                    super::editors::EditorsListCommand::new(ctx, args.clone()).execute(ui)
                }
                EditorsCommand::Add(args) => {
                    super::editors::EditorsAddCommand::new(ctx, args.clone()).execute(ui)
                }
                EditorsCommand::Remove(args) => {
                    super::editors::EditorsRemoveCommand::new(ctx, args.clone()).execute(ui)
                }
                EditorsCommand::Versions(args) => {
                    super::editors::EditorsVersionsCommand::new(ctx, args.clone()).execute(ui)
                }
            },
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => super::list::ListCommand::new(ctx, ListArgs::default()).execute(ui),
        }
    }
}
