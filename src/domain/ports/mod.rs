//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_events;
pub mod compiler;

pub use build_events::{BuildEvent, BuildEventSink, NoopEventSink};
pub use compiler::{CompileError, Compiler};
