//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::catalog::SortKey;

/// Runway - keep track of your Unity projects and the editors that open them.
#[derive(Debug, Parser)]
#[command(name = "runway")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the project store (overrides ~/.runway/store.json)
    #[arg(long, global = true, env = "RUNWAY_STORE")]
    pub store: Option<PathBuf>,

    /// Path to config file (overrides ~/.runway/config.yml)
    #[arg(short, long, global = true, env = "RUNWAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Never prompt; missing input is an error unless RUNWAY_PROMPT_<KEY> is set
    #[arg(long, global = true)]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List registered projects (default if no command specified)
    #[command(alias = "ls")]
    List(ListArgs),

    /// Register a project folder
    Add(AddArgs),

    /// Forget a registered project (the folder is left alone)
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// Rename a project folder and its matching files
    Rename(RenameArgs),

    /// Edit a project's tags
    Tags(TagsArgs),

    /// Open a project in its editor
    Open(OpenArgs),

    /// Launch an editor executable against a project folder
    Launch(LaunchArgs),

    /// Show a folder in the file manager
    Show(ShowArgs),

    /// Manage editor folders and installed versions
    #[command(subcommand)]
    Editors(EditorsCommand),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Only show projects whose name or tags contain this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort key (defaults to the configured default_sort)
    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,

    /// Sort ascending (default for name and version)
    #[arg(long, conflicts_with = "desc")]
    pub asc: bool,

    /// Sort descending (default for modified)
    #[arg(long)]
    pub desc: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AddArgs {
    /// Project folder (prompts when omitted)
    pub path: Option<PathBuf>,

    /// Tags to attach (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,
}

/// Arguments for the `remove` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RemoveArgs {
    /// Registered project folder
    pub path: PathBuf,
}

/// Arguments for the `rename` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RenameArgs {
    /// Registered project folder
    pub path: PathBuf,

    /// New folder name (prompts when omitted)
    pub new_name: Option<String>,
}

/// Arguments for the `tags` command.
#[derive(Debug, Clone, clap::Args)]
pub struct TagsArgs {
    /// Registered project folder
    pub path: PathBuf,

    /// Add a tag (repeatable)
    #[arg(short, long)]
    pub add: Vec<String>,

    /// Remove a tag (repeatable)
    #[arg(short, long)]
    pub remove: Vec<String>,

    /// Replace all tags (comma-separated)
    #[arg(long, conflicts_with = "clear")]
    pub set: Option<String>,

    /// Remove every tag
    #[arg(long)]
    pub clear: bool,
}

impl TagsArgs {
    /// Whether any edit was requested on the command line.
    pub fn has_edits(&self) -> bool {
        !self.add.is_empty() || !self.remove.is_empty() || self.set.is_some() || self.clear
    }
}

/// Arguments for the `open` command.
#[derive(Debug, Clone, clap::Args)]
pub struct OpenArgs {
    /// Registered project folder
    pub path: PathBuf,

    /// Editor version to use instead of the project's own
    #[arg(short, long)]
    pub editor: Option<String>,

    /// Wait for the editor to exit
    #[arg(long)]
    pub wait: bool,
}

/// Arguments for the `launch` command.
#[derive(Debug, Clone, clap::Args)]
pub struct LaunchArgs {
    /// Editor executable
    pub editor: PathBuf,

    /// Project folder
    pub project: PathBuf,

    /// Wait for the editor to exit
    #[arg(long)]
    pub wait: bool,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ShowArgs {
    /// Folder to reveal
    pub path: PathBuf,
}

/// `editors` subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum EditorsCommand {
    /// List registered editor folders
    List(EditorsListArgs),

    /// Register a folder that contains editor installs
    Add(EditorsAddArgs),

    /// Forget an editor folder
    Remove(EditorsRemoveArgs),

    /// List installed editor versions
    Versions(EditorsVersionsArgs),
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct EditorsListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct EditorsAddArgs {
    /// Editor folder (prompts when omitted)
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct EditorsRemoveArgs {
    /// Registered editor folder
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct EditorsVersionsArgs {
    /// Only scan this folder instead of every registered one
    #[arg(long)]
    pub folder: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
