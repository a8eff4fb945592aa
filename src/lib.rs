//! emproj - Emscripten source-file projects
//!
//! Treats a directory of C sources as a project whose artifacts are
//! WebAssembly binaries, produced by running `emcc` once per source file.
//!
//! The library has no dependency on any host build orchestrator. The
//! `emproj` binary is a thin adapter over the plain functions re-exported here.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{plan_units, run_build, BuildConfig, BuildOutcome, BuildUseCase, UnitPlan};
pub use config::{Manifest, ToolchainConfig, Verbosity};
pub use domain::entities::{Project, SourceUnit};
pub use domain::ports::{BuildEvent, BuildEventSink, CompileError, Compiler, NoopEventSink};
pub use domain::value_objects::{
    derive_artifact_paths, derive_base, ArtifactPaths, CompileInvocation, RebuildCheck, TaskState,
};
pub use error::{EmprojError, EmprojResult};
pub use infrastructure::{enumerate_sources, EmccCompiler, SourceFileCollection};
