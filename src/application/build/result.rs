//! Build result types

use std::path::PathBuf;
use std::time::Duration;

use crate::domain::entities::SourceUnit;
use crate::domain::value_objects::{ArtifactPaths, TaskState};

/// A source unit paired with the artifacts derived for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitPlan {
    pub source: SourceUnit,
    pub artifacts: ArtifactPaths,
}

/// Result of a successful build
#[derive(Debug, Clone, Default)]
pub struct BuildOutcome {
    /// Units compiled, in the order they were compiled
    pub compiled: Vec<UnitPlan>,
    pub duration_ms: u64,
    pub state: TaskState,
}

impl BuildOutcome {
    /// Declared `.wasm` results of the compiled units
    ///
    /// These are expected to exist as a side effect of `emcc`, but are never checked.
    pub fn results(&self) -> Vec<PathBuf> {
        self.compiled
            .iter()
            .map(|unit| unit.artifacts.wasm.clone())
            .collect()
    }

    pub fn compiled_count(&self) -> usize {
        self.compiled.len()
    }
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`
pub fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
