//! Presentation Layer
//!
//! This layer handles CLI argument parsing (via clap). Command handlers and
//! output rendering live in the binary.

pub mod cli;

pub use cli::{Cli, Commands};
