//! Configuration module for prompt rendering
//!
//! Provides the [`Settings`] schema and the loader for JSON, TOML and YAML
//! config files.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
