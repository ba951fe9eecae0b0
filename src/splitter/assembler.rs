//! Output assembly
//!
//! Wraps transformed bodies in the script template: shared preamble,
//! configuration import, a free function housing the body, and the fixed
//! entry-point block. Also assembles the extraction-free units (main
//! script, README) and the configuration module.

use crate::splitter::plan::{StepSpec, CONFIG_FILENAME, MAIN_FILENAME, README_FILENAME};
use crate::splitter::templates;

/// One generated file: name plus full content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputUnit {
    pub filename: String,
    pub content: String,
}

impl OutputUnit {
    fn new(filename: &str, content: String) -> Self {
        OutputUnit {
            filename: filename.to_string(),
            content,
        }
    }
}

/// Assemble a step script around an already-transformed body.
pub fn step_script(spec: &StepSpec, transformed_body: &str) -> OutputUnit {
    let mut content = String::with_capacity(
        templates::PREAMBLE.len() + transformed_body.len() + 512,
    );
    content.push_str(templates::PREAMBLE);
    content.push('\n');
    content.push_str(templates::CONFIG_IMPORT);
    content.push('\n');
    content.push_str(&format!("def {}():\n", spec.function));
    content.push_str(transformed_body);
    content.push_str("\n\n");
    content.push_str(&templates::entry_point_block(
        spec.function,
        spec.run_comment,
        spec.success,
        spec.failure,
    ));
    OutputUnit::new(spec.filename, content)
}

/// Assemble the shared configuration module around the initializer body.
/// The body stays at class depth with its `self.` accesses intact; the
/// template adds the dataset and repository-skip fields plus persistence.
pub fn config_module(init_body: &str) -> OutputUnit {
    let mut content =
        String::with_capacity(templates::PREAMBLE.len() + init_body.len() + 2048);
    content.push_str(templates::PREAMBLE);
    content.push('\n');
    content.push_str(templates::CONFIG_MODULE_HEAD);
    content.push_str(init_body);
    content.push('\n');
    content.push_str(templates::CONFIG_MODULE_TAIL);
    OutputUnit::new(CONFIG_FILENAME, content)
}

/// Assemble the aggregating main script. Pure template, no extraction.
pub fn main_script() -> OutputUnit {
    let mut content = String::with_capacity(
        templates::PREAMBLE.len() + templates::MAIN_SCRIPT_BODY.len() + 1,
    );
    content.push_str(templates::PREAMBLE);
    content.push('\n');
    content.push_str(templates::MAIN_SCRIPT_BODY);
    OutputUnit::new(MAIN_FILENAME, content)
}

/// The documentation file.
pub fn readme() -> OutputUnit {
    OutputUnit::new(README_FILENAME, templates::README.to_string())
}
