//! Split orchestration
//!
//! Reads the source document once, then produces and writes every output
//! unit in plan order: configuration module first, the eight step scripts,
//! the main script, the README. Each unit is written as soon as it is
//! assembled; a failure partway through leaves the files already written
//! in place (the run is not transactional).

use crate::splitter::assembler::{self, OutputUnit};
use crate::splitter::extractor::{extract_function_body, ExtractError};
use crate::splitter::plan::{CONFIG_FILENAME, INIT_FUNCTION, STEPS};
use crate::splitter::rules::RulePipeline;
use crate::splitter::templates;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors terminating a split run
#[derive(Debug)]
pub enum SplitError {
    /// The source document could not be read.
    ReadSource { path: PathBuf, message: String },
    /// Extraction failed while producing a unit; carries the unit name so
    /// the diagnostic says which output was being generated.
    Extract { unit: String, error: ExtractError },
    /// An output file could not be written.
    WriteOutput { path: PathBuf, message: String },
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::ReadSource { path, message } => {
                write!(f, "cannot read source '{}': {}", path.display(), message)
            }
            SplitError::Extract { unit, error } => {
                write!(f, "while generating '{}': {}", unit, error)
            }
            SplitError::WriteOutput { path, message } => {
                write!(f, "cannot write '{}': {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for SplitError {}

/// Runs the full split against one source document.
pub struct SplitRunner {
    source_path: PathBuf,
    out_dir: PathBuf,
}

impl SplitRunner {
    pub fn new<S: AsRef<Path>, O: AsRef<Path>>(source_path: S, out_dir: O) -> Self {
        SplitRunner {
            source_path: source_path.as_ref().to_path_buf(),
            out_dir: out_dir.as_ref().to_path_buf(),
        }
    }

    /// Execute the split. Returns the filenames written, in write order.
    pub fn run(&self) -> Result<Vec<String>, SplitError> {
        let source =
            fs::read_to_string(&self.source_path).map_err(|e| SplitError::ReadSource {
                path: self.source_path.clone(),
                message: e.to_string(),
            })?;

        let mut written = Vec::with_capacity(11);

        // Configuration module first: every other script imports it.
        let init_body = self.extract(&source, INIT_FUNCTION, CONFIG_FILENAME)?;
        self.write_unit(&assembler::config_module(&init_body), &mut written)?;

        for step in &STEPS {
            let body = self.extract(&source, step.function, step.filename)?;
            let transformed = RulePipeline::for_step(step.renames).apply(&body);
            self.write_unit(&assembler::step_script(step, &transformed), &mut written)?;
        }

        self.write_unit(&assembler::main_script(), &mut written)?;
        self.write_unit(&assembler::readme(), &mut written)?;

        Ok(written)
    }

    /// The fixed confirmation listing printed after a successful run.
    pub fn confirmation(&self) -> &'static str {
        templates::CONFIRMATION
    }

    fn extract(&self, source: &str, function: &str, unit: &str) -> Result<String, SplitError> {
        extract_function_body(source, function).map_err(|error| SplitError::Extract {
            unit: unit.to_string(),
            error,
        })
    }

    fn write_unit(&self, unit: &OutputUnit, written: &mut Vec<String>) -> Result<(), SplitError> {
        let path = self.out_dir.join(&unit.filename);
        write_file(&path, &unit.content)?;
        written.push(unit.filename.clone());
        Ok(())
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), SplitError> {
    fs::write(path, content).map_err(|e| SplitError::WriteOutput {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
