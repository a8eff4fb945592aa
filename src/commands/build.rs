//! Build command handler
//!
//! Compiles every selected project in manifest order. The first failure
//! aborts the whole command; later projects are not attempted.

use std::time::Instant;

use anyhow::{Context, Result};

use emproj::application::duration_ms;
use emproj::infrastructure::{CompilerOutput, EmccCompiler};
use emproj::presentation::Commands;
use emproj::{BuildEventSink, BuildUseCase, ToolchainConfig};

use super::CommandContext;
use crate::ui::json::{emit_event, events::CompleteEvent, events::StartEvent};
use crate::ui::sinks::{ConsoleEventSink, JsonEventSink};
use crate::ui::terminal::detect_capabilities;

pub fn cmd_build(ctx: &CommandContext) -> Result<()> {
    let toolchain = ToolchainConfig::from_env();

    if ctx.json {
        let command = Commands::Build.name();
        emit_event(&StartEvent::new(command))?;
        let compiler = EmccCompiler::new().with_output(CompilerOutput::StdoutToStderr);
        let started = Instant::now();
        build_all(ctx, &toolchain, compiler, JsonEventSink::stdout())?;
        let elapsed = duration_ms(started.elapsed());
        emit_event(&CompleteEvent::success(command).with_duration(elapsed))?;
        return Ok(());
    }

    if ctx.verbosity >= emproj::Verbosity::Verbose {
        eprintln!("Manifest: {}", ctx.manifest_path.display());
    }

    let caps = detect_capabilities();
    let sink = ConsoleEventSink::stderr(ctx.verbosity, caps.supports_unicode);
    build_all(ctx, &toolchain, EmccCompiler::new(), sink)
}

fn build_all<E: BuildEventSink>(
    ctx: &CommandContext,
    toolchain: &ToolchainConfig,
    compiler: EmccCompiler,
    sink: E,
) -> Result<()> {
    let mut use_case = BuildUseCase::new(compiler, sink);

    for project in &ctx.projects {
        use_case
            .build(project, toolchain)
            .with_context(|| BuildUseCase::<EmccCompiler, E>::describe(project))?;
    }

    Ok(())
}
