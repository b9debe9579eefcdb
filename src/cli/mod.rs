//! CLI module for meeting-assistant
//!
//! Contains argument parsing and command implementations.

pub mod args;
pub mod commands;
pub mod completions;

pub use args::{Cli, Commands, ConfigCommand};
