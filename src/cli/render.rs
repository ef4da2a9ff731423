//! Swatch command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::config::find_config;
use crate::output::{resolve_output_path, save_png};
use crate::swatch::render_swatch;

use super::{load_settings_or_exit, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the swatch command - render the palette and write a PNG
pub fn run_swatch(config: Option<&Path>, output: Option<&str>, cell: u32) -> ExitCode {
    let settings = match load_settings_or_exit(config) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let state = match settings.color_state() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let image = match render_swatch(&state, &settings.colors, cell) {
        Ok(img) => img,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let config_name = find_config(config)
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    let path = resolve_output_path(output.unwrap_or(""), &config_name);

    if let Err(e) = save_png(&image, Path::new(&path)) {
        eprintln!("Error: Failed to save '{}': {}", path, e);
        return ExitCode::from(EXIT_ERROR);
    }

    println!("Saved {}", path);
    ExitCode::from(EXIT_SUCCESS)
}
