//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod info;
mod render;
mod resolve;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{self, ConfigError, Settings};
use crate::logging;

/// Process exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Promptpix - Resolve terminal prompt colors and render them to PNG
#[derive(Parser)]
#[command(name = "promptpix")]
#[command(about = "Promptpix - Resolve terminal prompt colors and render them to PNG")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply color codes or SGR fragments in order and print the resulting colors
    Resolve {
        /// Codes such as 31 or 104, or fragments such as "[1;31;44m"
        #[arg(required = true, allow_hyphen_values = true)]
        codes: Vec<String>,

        /// Settings file (.json, .toml, .yaml, .yml); defaults to $PROMPTPIX_CONFIG
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the output file name a render would use
    OutputPath {
        /// Config path the name is derived from (not read)
        #[arg(short, long, default_value = "")]
        config: String,

        /// Explicit output path; returned unchanged when set
        #[arg(short, long, default_value = "")]
        output: String,
    },

    /// List the 16 palette colors with overrides applied
    Palette {
        /// Settings file (.json, .toml, .yaml, .yml); defaults to $PROMPTPIX_CONFIG
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Render the resolved palette to a PNG swatch
    Swatch {
        /// Settings file (.json, .toml, .yaml, .yml); defaults to $PROMPTPIX_CONFIG
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file. If omitted the name is derived from the config path
        #[arg(short, long)]
        output: Option<String>,

        /// Cell size in pixels (minimum 4)
        #[arg(long, default_value = "16", value_parser = clap::value_parser!(u32).range(1..=512))]
        cell: u32,
    },
}

/// Load settings for a command, reporting failures on stderr.
pub(crate) fn load_settings_or_exit(path: Option<&Path>) -> Result<Settings, ExitCode> {
    config::load_or_default(path).map_err(|e| {
        eprintln!("Error: {}", e);
        match e {
            ConfigError::UnsupportedFormat(_) => ExitCode::from(EXIT_INVALID_ARGS),
            _ => ExitCode::from(EXIT_ERROR),
        }
    })
}

/// Parse arguments and run the selected command
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Resolve { codes, config } => resolve::run_resolve(&codes, config.as_deref()),
        Commands::OutputPath { config, output } => info::run_output_path(&output, &config),
        Commands::Palette { config } => info::run_palette(config.as_deref()),
        Commands::Swatch { config, output, cell } => {
            render::run_swatch(config.as_deref(), output.as_deref(), cell)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve_codes() {
        let cli = Cli::try_parse_from(["promptpix", "resolve", "31", "44"]).unwrap();
        match cli.command {
            Commands::Resolve { codes, config } => {
                assert_eq!(codes, vec!["31", "44"]);
                assert!(config.is_none());
            }
            _ => panic!("expected resolve"),
        }
    }

    #[test]
    fn test_parse_output_path_defaults() {
        let cli = Cli::try_parse_from(["promptpix", "output-path"]).unwrap();
        match cli.command {
            Commands::OutputPath { config, output } => {
                assert_eq!(config, "");
                assert_eq!(output, "");
            }
            _ => panic!("expected output-path"),
        }
    }

    #[test]
    fn test_parse_swatch_rejects_zero_cell() {
        assert!(Cli::try_parse_from(["promptpix", "swatch", "--cell", "0"]).is_err());
    }

    #[test]
    fn test_resolve_requires_codes() {
        assert!(Cli::try_parse_from(["promptpix", "resolve"]).is_err());
    }
}
