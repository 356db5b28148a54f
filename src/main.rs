//! web-pathfix: rewrite backslash resource paths in exported web markup
//!
//! Runs after the web export step. Exits with status 1 when a target file
//! is missing.

use std::process::ExitCode;

fn main() -> ExitCode {
    match web_pathfix::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ {:#}", err);
            ExitCode::FAILURE
        }
    }
}
