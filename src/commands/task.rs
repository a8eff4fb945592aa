//! needs-build and clean handlers
//!
//! Both answer from the task interface without touching the compiler.

use anyhow::Result;

use emproj::{BuildUseCase, EmccCompiler, NoopEventSink};

use super::CommandContext;
use crate::ui::json::{emit_event, events::ProjectEvent};

pub fn cmd_needs_build(ctx: &CommandContext) -> Result<()> {
    let use_case = BuildUseCase::new(EmccCompiler::new(), NoopEventSink);

    for project in &ctx.projects {
        let check = use_case.needs_build(project);

        if ctx.json {
            emit_event(&ProjectEvent::NeedsBuild {
                project: project.name(),
                required: check.required,
                reason: check.reason.as_deref(),
            })?;
        } else if check.required {
            println!("{}: build required", project.name());
        } else {
            println!("{}: up to date", project.name());
        }
    }

    Ok(())
}

pub fn cmd_clean(ctx: &CommandContext) -> Result<()> {
    let use_case = BuildUseCase::new(EmccCompiler::new(), NoopEventSink);

    for project in &ctx.projects {
        use_case.clean(project)?;

        if ctx.json {
            emit_event(&ProjectEvent::Clean {
                project: project.name(),
                removed: 0,
            })?;
        } else if ctx.prints_text() {
            println!(
                "{}: nothing removed (artifacts in {} are kept)",
                project.name(),
                project.output_dir().display()
            );
        }
    }

    Ok(())
}
