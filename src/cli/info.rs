//! Info command implementations (palette, output-path)

use std::path::Path;
use std::process::ExitCode;

use crate::output::resolve_output_path;
use crate::palette::{resolve_named, ColorName};

use super::{load_settings_or_exit, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the output-path command
pub fn run_output_path(explicit: &str, config: &str) -> ExitCode {
    println!("{}", resolve_output_path(explicit, config));
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the palette command
pub fn run_palette(config: Option<&Path>) -> ExitCode {
    let settings = match load_settings_or_exit(config) {
        Ok(s) => s,
        Err(code) => return code,
    };

    println!("Palette:");
    println!();
    for name in ColorName::ALL {
        match resolve_named(name, &settings.colors) {
            Ok(rgb) => {
                let marker =
                    if settings.colors.contains_key(name.as_str()) { " (override)" } else { "" };
                println!("  {:<13} {}{}", name, rgb, marker);
            }
            Err(e) => {
                eprintln!("Error: {}: {}", name, e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }
    ExitCode::from(EXIT_SUCCESS)
}
