//! Resolve command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::sgr::apply_fragment;

use super::{load_settings_or_exit, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the resolve command - apply each code to one shared state
pub fn run_resolve(codes: &[String], config: Option<&Path>) -> ExitCode {
    let settings = match load_settings_or_exit(config) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let mut state = match settings.color_state() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    for code in codes {
        if let Err(e) = apply_fragment(&mut state, code, &settings.colors) {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
        println!("{} fg={} bg={}", code.escape_debug(), state.foreground, state.background);
    }

    ExitCode::from(EXIT_SUCCESS)
}
