// src/core/types.rs — Candidate programs and failure classifications

use serde::{Deserialize, Serialize};
use std::fmt;

/// One candidate attempt from the archive. Read-only input to prompt assembly.
///
/// `score` is required: archive rows without it fail to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramRecord {
    pub code: String,
    pub score: f64,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub evaluation_logs: Option<String>,
}

impl ProgramRecord {
    pub fn new(code: impl Into<String>, score: f64) -> Self {
        Self {
            code: code.into(),
            score,
            explanation: None,
            feedback: None,
            evaluation_logs: None,
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = Some(feedback.into());
        self
    }

    pub fn with_evaluation_logs(mut self, logs: impl Into<String>) -> Self {
        self.evaluation_logs = Some(logs.into());
        self
    }
}

/// Why a candidate needs another attempt. The label is what the retry prompt shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The SEARCH/REPLACE blocks did not apply to the current code.
    PatchApplication,
    /// The patched program failed to run or score.
    Evaluation,
}

impl FailureKind {
    pub fn label(&self) -> &'static str {
        match self {
            FailureKind::PatchApplication => "patch application",
            FailureKind::Evaluation => "evaluation",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
