// src/lib.rs — Library root for evoprompt

pub mod core;
pub mod infra;
pub mod prompt;
