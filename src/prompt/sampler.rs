// src/prompt/sampler.rs — Builds the per-generation prompts

use minijinja::context;
use std::path::Path;

use super::evolve::{EditScope, EvolveBlockDetector, MarkerDetector};
use super::feedback::build_feedback_prompt;
use super::retry::build_retry_prompt;
use super::rows::{format_rows, target_score};
use super::templates::{
    format_score, PromptTemplates, GENERATION, RESTRICTED_INSTRUCTIONS, UNRESTRICTED_INSTRUCTIONS,
};
use crate::core::archive::Archive;
use crate::core::types::ProgramRecord;
use crate::infra::config::{Config, FeedbackConfig, SamplerConfig};
use crate::infra::errors::PromptError;

/// Assembles generation, retry and feedback prompts.
///
/// Holds only configuration and a shared reference to the archive; every
/// build is a pure function of its inputs (plus the script read for feedback).
pub struct PromptSampler<'a, A: ?Sized> {
    archive: &'a A,
    detector: Box<dyn EvolveBlockDetector>,
    templates: PromptTemplates,
    sampler: SamplerConfig,
    feedback: FeedbackConfig,
}

impl<'a, A: Archive + ?Sized> PromptSampler<'a, A> {
    pub fn new(archive: &'a A) -> Result<Self, PromptError> {
        Self::with_config(archive, &Config::default())
    }

    pub fn with_config(archive: &'a A, config: &Config) -> Result<Self, PromptError> {
        config.feedback.validate()?;
        Ok(Self {
            archive,
            detector: Box::new(MarkerDetector),
            templates: PromptTemplates::new()?,
            sampler: config.sampler.clone(),
            feedback: config.feedback.clone(),
        })
    }

    /// Swap the evolve-block rule, e.g. for a language with different comment syntax.
    pub fn with_detector(mut self, detector: impl EvolveBlockDetector + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    pub fn sampler_config(&self) -> &SamplerConfig {
        &self.sampler
    }

    /// Generation prompt for `parent`, showing `inspirations` in the given order.
    pub fn build(
        &self,
        parent: &ProgramRecord,
        inspirations: &[ProgramRecord],
    ) -> Result<String, PromptError> {
        let scope = self.detector.edit_scope(&parent.code);
        let evolve_instructions = match scope {
            EditScope::Restricted => RESTRICTED_INSTRUCTIONS,
            EditScope::Unrestricted => UNRESTRICTED_INSTRUCTIONS,
        };
        let target = format_score(target_score(parent, inspirations));
        let include_feedback = self.sampler.enable_feedback;

        tracing::debug!(
            "Building generation prompt: {:?} scope, target {}, {} inspirations",
            scope,
            target,
            inspirations.len()
        );

        self.templates.render(
            &GENERATION,
            context! {
                inspirations => format_rows(inspirations, include_feedback),
                parent => format_rows(std::slice::from_ref(parent), include_feedback),
                target_score => target,
                evolve_instructions => evolve_instructions,
            },
        )
    }

    /// Sample inspirations from the archive with the configured counts, then build.
    pub fn build_next(&self, parent: &ProgramRecord) -> Result<String, PromptError> {
        let inspirations = self
            .archive
            .inspirations(self.sampler.k_elite, self.sampler.k_rand);
        self.build(parent, &inspirations)
    }

    pub fn build_retry(
        &self,
        current_code: &str,
        error_message: &str,
        failure_type: &str,
    ) -> Result<String, PromptError> {
        tracing::debug!("Building {} retry prompt", failure_type);
        build_retry_prompt(&self.templates, current_code, error_message, failure_type)
    }

    /// Prompt asking an evaluator model why `code` scored `score`.
    ///
    /// Without an explicit script path the configured default (if any) is
    /// used. An unreadable script never fails the build.
    pub fn build_feedback(
        &self,
        code: &str,
        score: f64,
        logs: Option<&str>,
        evaluation_script_path: Option<&Path>,
    ) -> Result<String, PromptError> {
        let script = evaluation_script_path.or(self.feedback.evaluation_script.as_deref());
        build_feedback_prompt(
            &self.templates,
            &self.feedback.language,
            code,
            score,
            logs,
            script,
        )
    }

    pub fn build_feedback_for(
        &self,
        record: &ProgramRecord,
        evaluation_script_path: Option<&Path>,
    ) -> Result<String, PromptError> {
        self.build_feedback(
            &record.code,
            record.score,
            record.evaluation_logs.as_deref(),
            evaluation_script_path,
        )
    }
}
