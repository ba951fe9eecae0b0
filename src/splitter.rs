//! Main module for the script-splitting engine

pub mod assembler;
pub mod extractor;
pub mod plan;
pub mod rules;
pub mod runner;
pub mod templates;
