//! Terminal user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for scripts and CI
//! - [`MockUI`] for tests
//! - Prompts, theme and tables
//!
//! # Example
//!
//! ```
//! use runway::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Projects");
//! ui.success("Project added");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use table::Table;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, RunwayTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Write command output (tables, JSON) to stdout in every output mode.
    fn data(&mut self, text: &str);

    /// Show a prompt and get user input.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a contextual hint.
    fn show_hint(&mut self, hint: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for overrides and mocks).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
    /// Default value if user just presses enter.
    pub default: Option<String>,
}

impl Prompt {
    /// Free-form text prompt.
    pub fn input(key: &str, question: &str, default: Option<&str>) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Input,
            default: default.map(String::from),
        }
    }

    /// Pick one of `options`; the answer is the chosen option's value.
    pub fn select(key: &str, question: &str, options: Vec<PromptOption>) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Select { options },
            default: None,
        }
    }
}

/// The type of prompt.
#[derive(Debug, Clone)]
pub enum PromptType {
    /// Free-form text input.
    Input,
    /// Select one from a list of options.
    Select { options: Vec<PromptOption> },
}

/// An option in a select prompt.
#[derive(Debug, Clone)]
pub struct PromptOption {
    /// Display label.
    pub label: String,
    /// Value returned when selected.
    pub value: String,
}

impl PromptOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Answer to a prompt: the typed text or the selected option's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptResult(String);

impl PromptResult {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_string(&self) -> String {
        self.0.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
