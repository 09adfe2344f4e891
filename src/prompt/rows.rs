// src/prompt/rows.rs — Renders program records into prompt fragments

use super::templates::{format_score, NO_EXPLANATION, NO_LOGS, NO_ROWS};
use crate::core::types::ProgramRecord;

/// Render records in the given order, separated by blank lines.
///
/// Each entry shows the score, the explanation, the code in a bare fence and,
/// when `include_feedback` is set and the record has some, its feedback.
/// An empty slice renders as `None yet.`.
pub fn format_rows(records: &[ProgramRecord], include_feedback: bool) -> String {
    if records.is_empty() {
        return NO_ROWS.to_string();
    }

    records
        .iter()
        .map(|r| format_row(r, include_feedback))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_row(record: &ProgramRecord, include_feedback: bool) -> String {
    let explanation = record
        .explanation
        .as_deref()
        .filter(|e| !e.is_empty())
        .unwrap_or(NO_EXPLANATION);

    let mut out = format!(
        "**Score: {}**\nExplanation: {}\n```\n{}\n```",
        format_score(record.score),
        explanation,
        record.code
    );

    if include_feedback {
        if let Some(feedback) = record.feedback.as_deref().filter(|f| !f.is_empty()) {
            out.push_str("\n\nFeedback:\n");
            out.push_str(feedback);
        }
    }

    out
}

/// A record's evaluation logs in a bare fence, or the no-logs placeholder.
pub fn format_evaluation_logs(record: &ProgramRecord) -> String {
    match record.evaluation_logs.as_deref().filter(|l| !l.is_empty()) {
        Some(logs) => format!("```\n{logs}\n```"),
        None => NO_LOGS.to_string(),
    }
}

/// The program that sets the bar: the best of the parent and every inspiration.
///
/// NaN scores are skipped by the `f64::max` fold, so a NaN parent with a
/// `-inf` inspiration yields `-inf`. Only an all-NaN input yields NaN.
pub fn target_score(parent: &ProgramRecord, inspirations: &[ProgramRecord]) -> f64 {
    inspirations
        .iter()
        .map(|r| r.score)
        .fold(parent.score, f64::max)
}
