//! Printing a dispatcher result and mapping it to an exit code

use colored::Colorize;
use std::process::ExitCode;
use todo_core::Output;

/// Exit status for usage errors
const USAGE_EXIT: u8 = 2;

pub fn emit(output: &Output, colors: bool) -> ExitCode {
    if !colors {
        colored::control::set_override(false);
    }

    if output.stdout.ends_with('\n') {
        print!("{}", output.stdout);
    } else {
        println!("{}", output.stdout);
    }

    if output.is_error() {
        eprintln!("{}", output.stderr.red());
        ExitCode::from(USAGE_EXIT)
    } else {
        ExitCode::SUCCESS
    }
}
