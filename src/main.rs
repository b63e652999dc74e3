//! stache: render mustache-style templates against YAML data
//!
//! Thin entry point; all argument handling and rendering lives in the library.

use std::process::ExitCode;

fn main() -> ExitCode {
    match stache::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", stache::cli::error_line(&err));
            ExitCode::FAILURE
        }
    }
}
