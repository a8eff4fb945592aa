//! Command handlers
//!
//! Each handler loads the manifest through `CommandContext`, then drives the
//! library use case for every selected project in order.

mod build;
mod listing;
mod task;

use std::path::PathBuf;

use anyhow::{Context, Result};

use emproj::config::ConfigWarning;
use emproj::presentation::{Cli, Commands};
use emproj::{Manifest, Project, Verbosity};

use crate::ui::json::{emit_event, events::WarningEvent};

/// Everything a command needs after parsing flags and the manifest
pub struct CommandContext {
    pub json: bool,
    pub verbosity: Verbosity,
    pub manifest_path: PathBuf,
    pub projects: Vec<Project>,
}

impl CommandContext {
    /// Load the manifest, apply env and flag overrides, and resolve projects
    pub fn load(cli: &Cli) -> Result<Self> {
        let (manifest, warnings) = Manifest::load_with_warnings(&cli.manifest)
            .with_context(|| format!("failed to load manifest {}", cli.manifest.display()))?;

        report_warnings(&warnings, cli.json);

        let manifest = manifest.with_env_overrides();
        let verbosity = Verbosity::from_count(cli.verbose, manifest.output.verbosity);
        let projects = manifest.resolve_projects(&cli.manifest, &cli.projects)?;

        Ok(Self {
            json: cli.json,
            verbosity,
            manifest_path: cli.manifest.clone(),
            projects,
        })
    }

    /// Whether human-readable lines should be printed
    pub fn prints_text(&self) -> bool {
        !self.json && self.verbosity > Verbosity::Quiet
    }
}

fn report_warnings(warnings: &[ConfigWarning], json: bool) {
    for warning in warnings {
        if json {
            let _ = emit_event(&WarningEvent::from(warning));
            continue;
        }

        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        match &warning.suggestion {
            Some(suggestion) => eprintln!(
                "[WARN] Unknown key '{}' in {} (did you mean '{}'?)",
                warning.key, location, suggestion
            ),
            None => eprintln!("[WARN] Unknown key '{}' in {}", warning.key, location),
        }
    }
}

/// Run the selected command
pub fn dispatch(cli: &Cli) -> Result<()> {
    let ctx = CommandContext::load(cli)?;

    match cli.command {
        Commands::Build => build::cmd_build(&ctx),
        Commands::NeedsBuild => task::cmd_needs_build(&ctx),
        Commands::Clean => task::cmd_clean(&ctx),
        Commands::Results => listing::cmd_results(&ctx),
        Commands::Sources => listing::cmd_sources(&ctx),
    }
}
