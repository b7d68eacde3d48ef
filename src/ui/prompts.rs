//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::error::{Result, RunwayError};

use super::{Prompt, PromptOption, PromptResult, PromptType};

fn map_dialoguer_err(e: dialoguer::Error) -> RunwayError {
    RunwayError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user for input on `term`.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    match &prompt.prompt_type {
        PromptType::Input => prompt_input(prompt, term),
        PromptType::Select { options } => prompt_select(prompt, options, term),
    }
}

fn prompt_input(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let theme = prompt_theme();
    let input = Input::<String>::with_theme(&theme)
        .with_prompt(&prompt.question)
        .allow_empty(true);

    let result: String = match &prompt.default {
        Some(default) => input
            .default(default.clone())
            .interact_text_on(term)
            .map_err(map_dialoguer_err)?,
        None => input.interact_text_on(term).map_err(map_dialoguer_err)?,
    };

    Ok(PromptResult::new(result.trim()))
}

fn prompt_select(prompt: &Prompt, options: &[PromptOption], term: &Term) -> Result<PromptResult> {
    if options.is_empty() {
        return Err(RunwayError::Other(anyhow::anyhow!(
            "Nothing to choose from for '{}'",
            prompt.key
        )));
    }

    let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
    let default_idx = prompt
        .default
        .as_ref()
        .and_then(|d| options.iter().position(|o| o.value == *d))
        .unwrap_or(0);

    let selection = Select::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .items(&labels)
        .default(default_idx)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::new(options[selection].value.clone()))
}
