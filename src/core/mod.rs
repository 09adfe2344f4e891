// src/core/mod.rs — Program records and the archive seam

pub mod archive;
pub mod types;
