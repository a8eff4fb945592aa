//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --manifest, --project) are inherited by all subcommands
//! - Subcommands map one-to-one onto the build task interface plus two listings

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::MANIFEST_FILE;

/// emproj - build C sources into WebAssembly with Emscripten
#[derive(Parser, Debug)]
#[command(name = "emproj")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "The build command requires EMCC_DIR to point at a directory containing emcc.")]
pub struct Cli {
    /// Output format for CI (NDJSON events on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the project manifest
    #[arg(short, long, global = true, default_value = MANIFEST_FILE)]
    pub manifest: PathBuf,

    /// Only act on this project (can be specified multiple times)
    #[arg(short, long = "project", value_name = "NAME", global = true)]
    pub projects: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Compile every .c source to .js/.wasm with emcc
    Build,

    /// Report whether a build is needed (always yes)
    NeedsBuild,

    /// Remove build outputs (does nothing; stale artifacts are kept)
    Clean,

    /// List the declared .wasm results
    Results,

    /// List compilation units and their derived artifacts
    Sources,
}

impl Commands {
    /// Name used in JSON events
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Build => "build",
            Commands::NeedsBuild => "needs-build",
            Commands::Clean => "clean",
            Commands::Results => "results",
            Commands::Sources => "sources",
        }
    }
}
