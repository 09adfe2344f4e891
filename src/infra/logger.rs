// src/infra/logger.rs — Structured logging with tracing

use tracing_subscriber::{fmt, EnvFilter};

/// Install a compact fmt subscriber. RUST_LOG overrides `level`.
///
/// Returns `false` when a global subscriber was already installed (e.g. by the
/// host loop), in which case the existing one is left untouched.
pub fn init_logging(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_noop() {
        init_logging("error");
        assert!(!init_logging("error"));
    }
}
