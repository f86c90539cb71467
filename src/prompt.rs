//! User confirmation before documents are written.
//! The processor only talks to the [`Prompter`] trait, so non-interactive
//! callers and tests can swap the dialoguer prompt for [`AutoConfirm`].

use dialoguer::Confirm;

use crate::error::{Error, Result};

pub trait Prompter {
    /// Asks a yes/no question. Returns `true` straight away when `skip` is set.
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool>;
}

/// Interactive prompt on the terminal.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Accepts every question.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoConfirm;

impl Prompter for AutoConfirm {
    fn confirm(&self, _skip: bool, _prompt: String) -> Result<bool> {
        Ok(true)
    }
}
