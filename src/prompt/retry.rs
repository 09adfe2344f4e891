// src/prompt/retry.rs — Retry prompt after a failed patch or evaluation

use minijinja::context;

use super::templates::{PromptTemplates, RETRY};
use crate::infra::errors::PromptError;

/// Ask the model to fix `current_code` given the error it produced.
///
/// `failure_type` is a free-form label; [`FailureKind::label`] gives the
/// canonical ones. Retry counting and backoff belong to the caller.
///
/// [`FailureKind::label`]: crate::core::types::FailureKind::label
pub fn build_retry_prompt(
    templates: &PromptTemplates,
    current_code: &str,
    error_message: &str,
    failure_type: &str,
) -> Result<String, PromptError> {
    templates.render(
        &RETRY,
        context! {
            current_code => current_code,
            error_message => error_message,
            failure_type => failure_type,
        },
    )
}
