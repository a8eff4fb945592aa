//! Compiler port - runs one compiler invocation to completion
//!
//! The build task only sees this trait, so tests can record invocations
//! instead of spawning `emcc`.

use std::fmt;

use crate::domain::value_objects::CompileInvocation;

/// Why a single compiler invocation failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The process could not be started (missing binary, not executable, ...)
    Launch(String),
    /// The process ran and exited unsuccessfully
    Exit(Option<i32>),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Launch(msg) => write!(f, "could not launch compiler: {}", msg),
            CompileError::Exit(Some(code)) => write!(f, "compiler exited with status {}", code),
            CompileError::Exit(None) => write!(f, "compiler terminated by signal"),
        }
    }
}

impl std::error::Error for CompileError {}

/// Runs compiler invocations synchronously
///
/// Implementations:
/// - `EmccCompiler` - spawns the real process
/// - test doubles that record or fail invocations
pub trait Compiler {
    /// Run `invocation` and block until it finishes
    fn compile(&self, invocation: &CompileInvocation) -> Result<(), CompileError>;
}

impl<C: Compiler + ?Sized> Compiler for &C {
    fn compile(&self, invocation: &CompileInvocation) -> Result<(), CompileError> {
        (**self).compile(invocation)
    }
}
