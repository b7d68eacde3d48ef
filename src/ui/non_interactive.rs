//! Non-interactive UI for scripts and CI.

use std::collections::HashMap;

use crate::error::{Result, RunwayError};

use super::{OutputMode, Prompt, PromptResult, UserInterface};

/// Prefix of environment variables that answer prompts by key.
pub const PROMPT_ENV_PREFIX: &str = "RUNWAY_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `RUNWAY_PROMPT_<KEY>` variables, then from the
/// prompt's default; anything else is an error.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn data(&mut self, text: &str) {
        println!("{}", text);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key) {
            return Ok(PromptResult::new(value.clone()));
        }

        if let Some(default) = &prompt.default {
            return Ok(PromptResult::new(default.clone()));
        }

        Err(RunwayError::ConfigValidationError {
            message: format!(
                "Cannot prompt for '{}' in non-interactive mode (set {} or pass it as an argument)",
                prompt.key, env_key
            ),
        })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_decoration() {
            println!("\n{}\n", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_decoration() {
            println!("  {}", hint);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
