// src/core/archive.rs — Inspiration source seam
//
// Selection policy (elite vs. random, dedup, islands) lives with whoever owns
// the archive. Prompt assembly only asks for an ordered list and renders it
// in the order given.

use super::types::ProgramRecord;

/// Supplies inspiration programs for the next generation prompt.
#[cfg_attr(test, mockall::automock)]
pub trait Archive {
    /// Up to `k_elite` strong performers and `k_rand` other entries, in the
    /// order they should be shown.
    fn inspirations(&self, k_elite: usize, k_rand: usize) -> Vec<ProgramRecord>;
}

impl<F> Archive for F
where
    F: Fn(usize, usize) -> Vec<ProgramRecord>,
{
    fn inspirations(&self, k_elite: usize, k_rand: usize) -> Vec<ProgramRecord> {
        self(k_elite, k_rand)
    }
}
