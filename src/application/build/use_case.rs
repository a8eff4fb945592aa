//! Build Use Case
//!
//! Orchestrates one build: toolchain check, output directory, then one
//! synchronous compiler call per source unit in walk order.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::ToolchainConfig;
use crate::domain::entities::Project;
use crate::domain::ports::{BuildEvent, BuildEventSink, Compiler, NoopEventSink};
use crate::domain::value_objects::{
    derive_artifact_paths, CompileInvocation, RebuildCheck, TaskState,
};
use crate::error::{EmprojError, EmprojResult};
use crate::infrastructure::{ensure_dir, enumerate_sources, EmccCompiler};

use super::options::BuildConfig;
use super::result::{duration_ms, BuildOutcome, UnitPlan};

/// Pair every source unit under `source_root` with its artifacts
///
/// Stops at the first name that cannot be derived.
pub fn plan_units(source_root: &Path, output_root: &Path) -> EmprojResult<Vec<UnitPlan>> {
    enumerate_sources(source_root)
        .map(|source| {
            let artifacts = derive_artifact_paths(output_root, source.file_name())?;
            Ok(UnitPlan { source, artifacts })
        })
        .collect()
}

/// Build with the real `emcc` and no event reporting
pub fn run_build(config: &BuildConfig) -> EmprojResult<BuildOutcome> {
    BuildUseCase::new(EmccCompiler::new(), NoopEventSink).execute("build", config)
}

/// Build use case - compiles a project's sources to WebAssembly
pub struct BuildUseCase<C, E>
where
    C: Compiler,
    E: BuildEventSink,
{
    compiler: C,
    events: E,
    state: TaskState,
}

impl<C, E> BuildUseCase<C, E>
where
    C: Compiler,
    E: BuildEventSink,
{
    /// Create a new build use case
    pub fn new(compiler: C, events: E) -> Self {
        Self {
            compiler,
            events,
            state: TaskState::NotStarted,
        }
    }

    /// State after the most recent build
    pub fn state(&self) -> TaskState {
        self.state
    }

    /// Human-readable task description
    pub fn describe(project: &Project) -> String {
        format!("Building {} with Emscripten", project.name())
    }

    /// Compile every source unit of `project`
    pub fn build(
        &mut self,
        project: &Project,
        toolchain: &ToolchainConfig,
    ) -> EmprojResult<BuildOutcome> {
        let config = BuildConfig::for_project(project, toolchain);
        self.execute(project.name(), &config)
    }

    /// Compile every source unit described by `config`
    ///
    /// `label` names the build in emitted events.
    pub fn execute(&mut self, label: &str, config: &BuildConfig) -> EmprojResult<BuildOutcome> {
        let started = Instant::now();

        self.events.on_event(BuildEvent::Started {
            project: label.to_string(),
            source_dir: config.source_root.clone(),
            output_dir: config.output_root.clone(),
        });

        match self.compile_all(config) {
            Ok(compiled) => {
                self.state = TaskState::Done;
                let duration_ms = duration_ms(started.elapsed());
                self.events.on_event(BuildEvent::Completed {
                    project: label.to_string(),
                    compiled: compiled.len(),
                    duration_ms,
                });
                Ok(BuildOutcome {
                    compiled,
                    duration_ms,
                    state: TaskState::Done,
                })
            }
            Err(err) => {
                self.state = TaskState::Aborted;
                self.events.on_event(BuildEvent::Failed {
                    project: label.to_string(),
                    error: err.to_string(),
                });
                Err(err)
            }
        }
    }

    fn compile_all(&self, config: &BuildConfig) -> EmprojResult<Vec<UnitPlan>> {
        let emcc_dir = config.toolchain.emcc_dir()?;
        ensure_dir(&config.output_root)?;

        let detailed = self.events.wants_detailed_events();
        let mut compiled = Vec::new();

        for (index, source) in enumerate_sources(&config.source_root).enumerate() {
            let artifacts = derive_artifact_paths(&config.output_root, source.file_name())?;
            let source_path = source.path();
            let invocation = CompileInvocation::new(emcc_dir, &source_path, &artifacts.js);

            if detailed {
                self.events.on_event(BuildEvent::UnitStarted {
                    index,
                    source: source_path.clone(),
                    command: invocation.display(),
                });
            }

            self.compiler
                .compile(&invocation)
                .map_err(|e| EmprojError::CompileFailure {
                    file: source_path.clone(),
                    reason: e.to_string(),
                })?;

            if detailed {
                self.events.on_event(BuildEvent::UnitCompiled {
                    index,
                    source: source_path,
                    wasm: artifacts.wasm.clone(),
                });
            }

            compiled.push(UnitPlan { source, artifacts });
        }

        Ok(compiled)
    }

    /// Whether `project` needs building; results are never cached, so always yes
    pub fn needs_build(&self, _project: &Project) -> RebuildCheck {
        RebuildCheck::always()
    }

    /// Clean is a no-op: artifacts from earlier builds are left in place
    pub fn clean(&self, _project: &Project) -> EmprojResult<()> {
        Ok(())
    }

    /// Declared `.wasm` results for `project`, whether or not they exist yet
    pub fn results(&self, project: &Project) -> EmprojResult<Vec<PathBuf>> {
        Ok(plan_units(&project.source_dir(), &project.output_dir())?
            .into_iter()
            .map(|unit| unit.artifacts.wasm)
            .collect())
    }
}
