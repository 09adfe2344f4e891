// src/prompt/mod.rs — Prompt assembly for the evolution loop

pub mod evolve;
pub mod feedback;
pub mod retry;
pub mod rows;
pub mod sampler;
pub mod templates;

pub use evolve::{has_evolve_blocks, EditScope, EvolveBlockDetector, MarkerDetector};
pub use rows::{format_evaluation_logs, format_rows, target_score};
pub use sampler::PromptSampler;
