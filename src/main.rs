//! resin - manage resource bindings, packages, and resource mappings

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = resin_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
