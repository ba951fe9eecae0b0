//! Command-line interface for espsplit
//! Splits the combined ESP Thread setup script into standalone step scripts.
//!
//! Usage:
//!   espsplit                          - Split ./setup_esp_threadweb.py into the current directory
//!   espsplit `<source>`                 - Split a specific source file
//!   espsplit `<source>` --out-dir `<dir>` - Write the generated files elsewhere

use clap::{Arg, Command};
use espsplit::SplitRunner;

/// Source filename used by the original combined-script workflow.
const DEFAULT_SOURCE: &str = "setup_esp_threadweb.py";

fn main() {
    let matches = Command::new("espsplit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Splits the monolithic ESP Thread setup script into standalone step scripts")
        .arg(
            Arg::new("source")
                .help("Path to the combined setup script")
                .default_value(DEFAULT_SOURCE)
                .index(1),
        )
        .arg(
            Arg::new("out-dir")
                .long("out-dir")
                .short('o')
                .help("Directory the generated files are written to")
                .default_value("."),
        )
        .get_matches();

    let source = matches.get_one::<String>("source").expect("has default");
    let out_dir = matches.get_one::<String>("out-dir").expect("has default");

    let runner = SplitRunner::new(source.as_str(), out_dir.as_str());
    match runner.run() {
        Ok(_) => print!("{}", runner.confirmation()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
