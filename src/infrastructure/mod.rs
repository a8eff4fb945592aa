//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `sources` - Directory walk producing source units
//! - `emcc` - Compiler port backed by the `emcc` process
//! - `output_dir` - Idempotent output directory creation

pub mod emcc;
pub mod output_dir;
pub mod sources;

// Re-export for convenience
pub use emcc::{CompilerOutput, EmccCompiler};
pub use output_dir::ensure_dir;
pub use sources::{enumerate_sources, SourceFileCollection, SourceIter};
