// src/prompt/feedback.rs — Evaluator feedback prompt (explain a score)

use minijinja::context;
use std::path::Path;

use super::templates::{
    format_score, PromptTemplates, FEEDBACK, NO_EVALUATION_SCRIPT, NO_LOGS, SCRIPT_READ_ERROR,
};
use crate::infra::errors::PromptError;

/// Read the evaluation script for display. Never fails: a read error becomes
/// descriptive text in the prompt.
pub fn read_evaluation_script(path: Option<&Path>) -> String {
    let Some(path) = path else {
        return NO_EVALUATION_SCRIPT.to_string();
    };

    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Failed to read evaluation script {}: {}", path.display(), e);
            format!("{SCRIPT_READ_ERROR}: {e}")
        }
    }
}

pub fn build_feedback_prompt(
    templates: &PromptTemplates,
    language: &str,
    code: &str,
    score: f64,
    logs: Option<&str>,
    evaluation_script_path: Option<&Path>,
) -> Result<String, PromptError> {
    let evaluation_script = read_evaluation_script(evaluation_script_path);
    let logs = logs.filter(|l| !l.is_empty()).unwrap_or(NO_LOGS);

    templates.render(
        &FEEDBACK,
        context! {
            language => language,
            code => code,
            score => format_score(score),
            evaluation_script => evaluation_script,
            logs => logs,
        },
    )
}
