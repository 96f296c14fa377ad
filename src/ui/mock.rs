//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt answers.
//!
//! # Example
//!
//! ```
//! use addon_build::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("install_node-gyp", "n");
//!
//! let prompt = Prompt {
//!     key: "install_node-gyp".to_string(),
//!     question: "Install node-gyp?".to_string(),
//!     default: true,
//! };
//! assert!(!ui.confirm(&prompt).unwrap());
//! assert_eq!(ui.prompts_shown(), ["install_node-gyp".to_string()]);
//! ```

use std::collections::HashMap;

use crate::error::{BuildError, Result};

use super::{parse_confirm_answer, Prompt, SpinnerHandle, UserInterface};

/// One captured line of output, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Captured {
    Message(String),
    Status(String),
    Blank,
    Success(String),
    Warning(String),
    Error(String),
}

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured prompt answers.
#[derive(Debug, Default)]
pub struct MockUI {
    transcript: Vec<Captured>,
    spinners: Vec<String>,
    prompt_responses: HashMap<String, String>,
    prompts_shown: Vec<String>,
    /// Prompt keys that fail as if stdin were closed.
    failing_prompts: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with no scripted answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the answer typed for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Make the prompt with `key` fail with an IO error.
    pub fn fail_prompt(&mut self, key: &str) {
        self.failing_prompts.push(key.to_string());
    }

    /// Everything printed, in order.
    pub fn transcript(&self) -> &[Captured] {
        &self.transcript
    }

    /// Get all captured messages.
    pub fn messages(&self) -> Vec<&str> {
        self.collect(|c| match c {
            Captured::Message(m) => Some(m.as_str()),
            _ => None,
        })
    }

    /// Get all captured progress lines.
    pub fn statuses(&self) -> Vec<&str> {
        self.collect(|c| match c {
            Captured::Status(m) => Some(m.as_str()),
            _ => None,
        })
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> Vec<&str> {
        self.collect(|c| match c {
            Captured::Success(m) => Some(m.as_str()),
            _ => None,
        })
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> Vec<&str> {
        self.collect(|c| match c {
            Captured::Warning(m) => Some(m.as_str()),
            _ => None,
        })
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> Vec<&str> {
        self.collect(|c| match c {
            Captured::Error(m) => Some(m.as_str()),
            _ => None,
        })
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages().iter().any(|m| m.contains(msg))
    }

    /// Check if a specific progress line was shown.
    pub fn has_status(&self, msg: &str) -> bool {
        self.statuses().iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes().iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings().iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors().iter().any(|m| m.contains(msg))
    }

    fn collect<'a, F>(&'a self, pick: F) -> Vec<&'a str>
    where
        F: Fn(&'a Captured) -> Option<&'a str>,
    {
        self.transcript.iter().filter_map(pick).collect()
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.transcript.push(Captured::Message(msg.to_string()));
    }

    fn status(&mut self, msg: &str) {
        self.transcript.push(Captured::Status(msg.to_string()));
    }

    fn blank(&mut self) {
        self.transcript.push(Captured::Blank);
    }

    fn success(&mut self, msg: &str) {
        self.transcript.push(Captured::Success(msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.transcript.push(Captured::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.transcript.push(Captured::Error(msg.to_string()));
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        self.prompts_shown.push(prompt.key.clone());

        if self.failing_prompts.contains(&prompt.key) {
            return Err(BuildError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "stdin closed",
            )));
        }

        Ok(match self.prompt_responses.get(&prompt.key) {
            Some(response) => parse_confirm_answer(response, prompt.default),
            None => prompt.default,
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner)
    }
}

/// Spinner handle returned by [`MockUI`].
#[derive(Debug, Default)]
pub struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn finish_clear(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(key: &str) -> Prompt {
        Prompt {
            key: key.to_string(),
            question: "Proceed?".to_string(),
            default: true,
        }
    }

    #[test]
    fn captures_output_in_order() {
        let mut ui = MockUI::new();
        ui.message("one");
        ui.status("progress");
        ui.blank();
        ui.success("two");
        ui.error("three");

        assert_eq!(
            ui.transcript(),
            [
                Captured::Message("one".to_string()),
                Captured::Status("progress".to_string()),
                Captured::Blank,
                Captured::Success("two".to_string()),
                Captured::Error("three".to_string()),
            ]
        );
        assert!(ui.has_message("one"));
        assert!(ui.has_status("progress"));
        assert!(!ui.has_message("progress"));
        assert!(ui.has_success("two"));
        assert!(ui.has_error("three"));
    }

    #[test]
    fn unconfigured_prompt_takes_default() {
        let mut ui = MockUI::new();
        assert!(ui.confirm(&prompt("anything")).unwrap());
        assert_eq!(ui.prompts_shown(), ["anything".to_string()]);
    }

    #[test]
    fn empty_response_takes_default() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("k", "");
        assert!(ui.confirm(&prompt("k")).unwrap());
    }

    #[test]
    fn failing_prompt_returns_error() {
        let mut ui = MockUI::new();
        ui.fail_prompt("k");
        assert!(ui.confirm(&prompt("k")).is_err());
    }

    #[test]
    fn spinners_are_recorded() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("Checking npm...");
        spinner.finish_clear();
        assert_eq!(ui.spinners(), ["Checking npm...".to_string()]);
    }
}
