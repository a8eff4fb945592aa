//! Build Event Port
//!
//! Provides an observable interface for build operations.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

/// Event emitted during a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    /// Build of a project started
    Started {
        project: String,
        source_dir: PathBuf,
        output_dir: PathBuf,
    },

    /// A compilation unit is about to be compiled
    UnitStarted {
        index: usize,
        source: PathBuf,
        command: String,
    },

    /// A compilation unit compiled successfully
    UnitCompiled {
        index: usize,
        source: PathBuf,
        wasm: PathBuf,
    },

    /// Build of a project finished successfully
    Completed {
        project: String,
        compiled: usize,
        duration_ms: u64,
    },

    /// Build of a project aborted
    Failed { project: String, error: String },
}

/// Trait for receiving build events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress lines on stderr
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait BuildEventSink {
    /// Handle a build event
    fn on_event(&self, event: BuildEvent);

    /// Check if this sink wants per-unit events
    ///
    /// Some sinks only care about the summary.
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

impl<S: BuildEventSink + ?Sized> BuildEventSink for &S {
    fn on_event(&self, event: BuildEvent) {
        (**self).on_event(event)
    }

    fn wants_detailed_events(&self) -> bool {
        (**self).wants_detailed_events()
    }
}
