//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::{BuildError, Result};

use super::{parse_confirm_answer, Prompt};

/// Convert dialoguer errors to BuildError.
fn map_dialoguer_err(e: dialoguer::Error) -> BuildError {
    BuildError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Ask a yes/no question on the terminal.
///
/// Reads a free-form line rather than a single key so that the answer
/// follows [`parse_confirm_answer`]: empty takes the default, `n` declines.
pub fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<bool> {
    let answer: String = Input::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .allow_empty(true)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(parse_confirm_answer(&answer, prompt.default))
}
