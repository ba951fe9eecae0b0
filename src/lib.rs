//! # espsplit
//!
//! Splits the monolithic ESP Thread Border Router setup script into ten
//! standalone Python scripts plus a shared configuration module.
//!
//! The engine lives in [`splitter`]: indentation-aware body extraction, an
//! ordered substitution rule pipeline, template assembly, and the run
//! orchestration. [`config`] models the shared configuration record the
//! generated scripts persist between runs.

pub mod config;
pub mod splitter;

pub use splitter::runner::{SplitError, SplitRunner};
