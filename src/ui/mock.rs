//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use runway::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("name", "Renamed");
//!
//! let answer = ui.prompt(&Prompt::input("name", "New name", None)).unwrap();
//! ui.success("Done!");
//!
//! assert_eq!(answer.as_string(), "Renamed");
//! assert!(ui.has_success("Done"));
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::Result;

use super::{OutputMode, Prompt, PromptResult, UserInterface};

/// Mock UI implementation for testing.
///
/// Supports both single responses (via `set_prompt_response`) and queued
/// responses (via `queue_prompt_responses`) for keys asked more than once.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    data: Vec<String>,
    headers: Vec<String>,
    hints: Vec<String>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue several responses for the same prompt key, returned in order.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        let queue = responses.into_iter().map(|s| s.to_string()).collect();
        self.prompt_queues.insert(key.to_string(), queue);
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Everything written through [`UserInterface::data`].
    pub fn data_lines(&self) -> &[String] {
        &self.data
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }

    /// All data output joined with newlines.
    pub fn data_text(&self) -> String {
        self.data.join("\n")
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.data.clear();
        self.headers.clear();
        self.hints.clear();
        self.prompts_shown.clear();
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn data(&mut self, text: &str) {
        self.data.push(text.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        if let Some(response) = self
            .prompt_queues
            .get_mut(&prompt.key)
            .and_then(|queue| queue.pop_front())
        {
            return Ok(PromptResult::new(response));
        }

        if let Some(response) = self.prompt_responses.get(&prompt.key) {
            return Ok(PromptResult::new(response.clone()));
        }

        if let Some(default) = &prompt.default {
            return Ok(PromptResult::new(default.clone()));
        }

        Ok(PromptResult::new(""))
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
