//! Compiler invocation value
//!
//! The exact command line for one compilation unit, built before anything is spawned.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Flags passed to every `emcc` call
pub const OPTIMIZATION_FLAGS: &[&str] = &["-Os"];

/// Name of the compiler executable inside the toolchain directory
const EMCC: &str = "emcc";

/// One `emcc` call: `<emcc_dir>/emcc -Os <source> -o <js>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileInvocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl CompileInvocation {
    pub fn new(emcc_dir: &Path, source: &Path, js_output: &Path) -> Self {
        let mut args: Vec<OsString> = OPTIMIZATION_FLAGS.iter().map(OsString::from).collect();
        args.push(source.as_os_str().to_owned());
        args.push(OsString::from("-o"));
        args.push(js_output.as_os_str().to_owned());

        Self {
            program: emcc_dir.join(EMCC),
            args,
        }
    }

    /// Shell-like rendering for diagnostics
    pub fn display(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}
