//! results and sources handlers
//!
//! Listings walk the source tree the same way a build does, but never run the compiler.

use anyhow::Result;

use emproj::{plan_units, BuildUseCase, EmccCompiler, NoopEventSink};

use super::CommandContext;
use crate::ui::json::{emit_event, events::ProjectEvent};

/// One declared `.wasm` path per line
pub fn cmd_results(ctx: &CommandContext) -> Result<()> {
    let use_case = BuildUseCase::new(EmccCompiler::new(), NoopEventSink);

    for project in &ctx.projects {
        for path in use_case.results(project)? {
            if ctx.json {
                emit_event(&ProjectEvent::Artifact {
                    project: project.name(),
                    path: &path,
                })?;
            } else {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}

/// Every compilation unit with the artifacts derived for it
pub fn cmd_sources(ctx: &CommandContext) -> Result<()> {
    for project in &ctx.projects {
        let units = plan_units(&project.source_dir(), &project.output_dir())?;

        if ctx.json {
            for unit in &units {
                emit_event(&ProjectEvent::Source {
                    project: project.name(),
                    source: &unit.source.path(),
                    js: &unit.artifacts.js,
                    wasm: &unit.artifacts.wasm,
                })?;
            }
            continue;
        }

        println!(
            "{} ({} source{})",
            project.name(),
            units.len(),
            if units.len() == 1 { "" } else { "s" }
        );
        for unit in &units {
            println!(
                "  {} -> {}, {}",
                unit.source.path().display(),
                unit.artifacts.js.display(),
                unit.artifacts.wasm.display()
            );
        }
    }

    Ok(())
}
