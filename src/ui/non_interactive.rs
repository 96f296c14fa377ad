//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::Result;

use super::{
    parse_confirm_answer, prompt_env_key, OutputMode, Prompt, SpinnerHandle, UserInterface,
};

/// UI implementation for non-interactive mode.
///
/// Prompts never block: an `ADDON_BUILD_PROMPT_<KEY>` environment variable
/// answers them, otherwise the prompt default applies.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("ADDON_BUILD_PROMPT_"))
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

    /// Resolve a prompt without printing anything.
    fn answer(&self, prompt: &Prompt) -> bool {
        match self.env_overrides.get(&prompt_env_key(&prompt.key)) {
            Some(value) => parse_confirm_answer(value, prompt.default),
            None => prompt.default,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn status(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn blank(&mut self) {
        if self.mode.shows_status() {
            println!();
        }
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        let answer = self.answer(prompt);
        println!("{} {}", prompt.question, if answer { "y" } else { "n" });
        Ok(answer)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_command_output() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner)
    }
}

/// Spinner that prints nothing.
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn finish_clear(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn install_prompt() -> Prompt {
        Prompt {
            key: "install_node-gyp".to_string(),
            question: "Install node-gyp?".to_string(),
            default: true,
        }
    }

    #[test]
    fn confirm_uses_default_without_override() {
        let ui = NonInteractiveUI::with_overrides(OutputMode::Quiet, HashMap::new());
        assert!(ui.answer(&install_prompt()));
    }

    #[test]
    fn confirm_uses_env_override() {
        let mut overrides = HashMap::new();
        overrides.insert(
            "ADDON_BUILD_PROMPT_INSTALL_NODE_GYP".to_string(),
            "n".to_string(),
        );
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Quiet, overrides);
        assert!(!ui.confirm(&install_prompt()).unwrap());
    }

    #[test]
    fn override_for_other_key_is_ignored() {
        let mut overrides = HashMap::new();
        overrides.insert("ADDON_BUILD_PROMPT_SOMETHING_ELSE".to_string(), "n".to_string());
        let ui = NonInteractiveUI::with_overrides(OutputMode::Quiet, overrides);
        assert!(ui.answer(&install_prompt()));
    }

    #[test]
    fn override_default_no_prompt_with_y() {
        let mut overrides = HashMap::new();
        overrides.insert("ADDON_BUILD_PROMPT_OVERWRITE".to_string(), "y".to_string());
        let ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let prompt = Prompt {
            key: "overwrite".to_string(),
            question: "Overwrite?".to_string(),
            default: false,
        };
        assert!(ui.answer(&prompt));
    }
}
