//! Promptpix - terminal prompt colors resolved for image rendering
//!
//! This library provides functionality to:
//! - Parse 6-digit hex color literals
//! - Resolve legacy 16-color SGR codes against a base16 palette with user overrides
//! - Derive the PNG file name for a rendered prompt from its config path

pub mod cli;
pub mod color;
pub mod config;
pub mod logging;
pub mod output;
pub mod palette;
pub mod sgr;
pub mod state;
pub mod swatch;
