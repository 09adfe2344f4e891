// src/infra/errors.rs — Error types for evoprompt

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    /// A built-in template failed to compile or a slot was left unfilled.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PromptError {
    /// True when the failure comes from template text rather than caller input.
    pub fn is_template(&self) -> bool {
        matches!(self, PromptError::Template(_))
    }
}
