//! Domain Layer
//!
//! Pure naming and project-layout rules for Emscripten source projects.
//!
//! ## Structure
//!
//! - `entities/` - Project and the source units discovered under it
//! - `value_objects/` - Artifact paths, compiler invocations, task state
//! - `ports/` - Interface definitions for infrastructure (compiler, event sinks)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or spawns processes
//! 2. **Pure Functions** - Name derivation is a function of the file name alone
//! 3. **Ports & Adapters** - The compiler is reached only through the `Compiler` port

pub mod entities;
pub mod ports;
pub mod value_objects;
