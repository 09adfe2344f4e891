// src/prompt/evolve.rs — Evolve-block detection
//
// Only answers "does this file mark mutable regions?". The edit applier owns
// the actual block semantics; the sentinels here must stay in step with it.

use regex::Regex;
use std::sync::LazyLock;

/// A begin sentinel followed, possibly several lines later, by an end sentinel.
static EVOLVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)#\s*EVOLVE-BLOCK-START.*?#\s*EVOLVE-BLOCK-END").expect("evolve regex compiles")
});

/// Which edit-region rule set the generation prompt carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditScope {
    /// Only lines inside evolve blocks may change.
    Restricted,
    /// Any line may change.
    Unrestricted,
}

/// Decides whether source text contains evolve blocks.
pub trait EvolveBlockDetector: Send + Sync {
    fn has_evolve_blocks(&self, code: &str) -> bool;

    fn edit_scope(&self, code: &str) -> EditScope {
        if self.has_evolve_blocks(code) {
            EditScope::Restricted
        } else {
            EditScope::Unrestricted
        }
    }
}

/// Matches the `# EVOLVE-BLOCK-START` / `# EVOLVE-BLOCK-END` comment pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerDetector;

impl EvolveBlockDetector for MarkerDetector {
    fn has_evolve_blocks(&self, code: &str) -> bool {
        EVOLVE_RE.is_match(code)
    }
}

impl<F> EvolveBlockDetector for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn has_evolve_blocks(&self, code: &str) -> bool {
        self(code)
    }
}

pub fn has_evolve_blocks(code: &str) -> bool {
    MarkerDetector.has_evolve_blocks(code)
}
