//! Error types for emproj
//!
//! Library code returns `EmprojResult`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for emproj operations
pub type EmprojResult<T> = Result<T, EmprojError>;

/// Main error type for emproj operations
///
/// Every variant is fatal for the build that raised it. Nothing is retried.
#[derive(Error, Debug)]
pub enum EmprojError {
    /// Source file name does not carry the `.c` suffix
    #[error("unknown extension: {file_name}")]
    UnsupportedExtension { file_name: String },

    /// `EMCC_DIR` is not set
    #[error("no EMCC_DIR specified - the source programs will not be compiled to .wasm")]
    MissingToolchain,

    /// The compiler exited non-zero or could not be started
    #[error("failed to compile {file}: {reason}")]
    CompileFailure { file: PathBuf, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest is not valid TOML or has the wrong shape
    #[error("invalid manifest {file}: {message}")]
    InvalidManifest { file: PathBuf, message: String },

    /// Manifest declares no `[[project]]` tables
    #[error("no projects declared in {file}")]
    NoProjects { file: PathBuf },

    /// `--project` named something the manifest does not declare
    #[error("unknown project '{name}'")]
    UnknownProject { name: String },
}

impl EmprojError {
    /// Stable short code used in JSON error events
    pub fn code(&self) -> &'static str {
        match self {
            EmprojError::UnsupportedExtension { .. } => "unsupported_extension",
            EmprojError::MissingToolchain => "missing_toolchain",
            EmprojError::CompileFailure { .. } => "compile_failure",
            EmprojError::Io(_) => "io",
            EmprojError::InvalidManifest { .. } => "invalid_manifest",
            EmprojError::NoProjects { .. } => "no_projects",
            EmprojError::UnknownProject { .. } => "unknown_project",
        }
    }
}
