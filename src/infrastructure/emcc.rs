//! Emscripten compiler runner
//!
//! Spawns `emcc` once per invocation and waits for it to exit.
//! There is no timeout: a hung compiler hangs the build.

use std::process::{Command, Stdio};

use crate::domain::ports::{CompileError, Compiler};
use crate::domain::value_objects::CompileInvocation;

/// Where the compiler's stdout goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompilerOutput {
    /// Pass stdout and stderr straight through
    #[default]
    Inherit,
    /// Send the compiler's stdout to our stderr, leaving stdout to the NDJSON stream
    StdoutToStderr,
}

/// Compiler implementation backed by the real `emcc` process
#[derive(Debug, Clone, Copy, Default)]
pub struct EmccCompiler {
    output: CompilerOutput,
}

impl EmccCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, output: CompilerOutput) -> Self {
        self.output = output;
        self
    }
}

impl Compiler for EmccCompiler {
    fn compile(&self, invocation: &CompileInvocation) -> Result<(), CompileError> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit());

        match self.output {
            CompilerOutput::Inherit => cmd.stdout(Stdio::inherit()),
            CompilerOutput::StdoutToStderr => cmd.stdout(Stdio::from(std::io::stderr())),
        };

        let status = cmd.status().map_err(|e| {
            CompileError::Launch(format!("{}: {}", invocation.program.display(), e))
        })?;

        if !status.success() {
            return Err(CompileError::Exit(status.code()));
        }

        Ok(())
    }
}
