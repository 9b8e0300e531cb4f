//! User interaction for overwrite confirmation.

use crate::error::{Error, Result};
use dialoguer::Confirm;
use std::path::Path;

/// Asks the user before an existing file is replaced.
pub trait Prompter {
    /// Returns `true` when `path` may be overwritten.
    fn confirm_overwrite(&self, path: &Path) -> Result<bool>;
}

/// Terminal prompter backed by `dialoguer`.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm_overwrite(&self, path: &Path) -> Result<bool> {
        Confirm::new()
            .with_prompt(format!("'{}' already exists. Overwrite?", path.display()))
            .default(false)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}
