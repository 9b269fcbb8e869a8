// Mart console entry point.
// All logic lives in the library so it can be tested without a terminal.

use std::process::ExitCode;

fn main() -> ExitCode {
    match mart_console_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("mart: {err}");
            ExitCode::FAILURE
        }
    }
}
