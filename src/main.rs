//! Promptpix - Command-line tool for resolving prompt colors and rendering swatches

use std::process::ExitCode;

use promptpix::cli;

fn main() -> ExitCode {
    cli::run()
}
