//! Value Objects
//!
//! Immutable values derived from projects and source units.

mod artifact;
mod invocation;
mod task_state;

pub use artifact::{derive_artifact_paths, derive_base, has_source_suffix, ArtifactPaths, SOURCE_SUFFIX};
pub use invocation::{CompileInvocation, OPTIMIZATION_FLAGS};
pub use task_state::{RebuildCheck, TaskState};
