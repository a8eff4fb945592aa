//! Build configuration

use std::path::PathBuf;

use crate::config::ToolchainConfig;
use crate::domain::entities::Project;

/// Everything a build needs, passed explicitly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Tree walked for `.c` files
    pub source_root: PathBuf,
    /// Flat directory receiving `<base>.js` and `<base>.wasm`
    pub output_root: PathBuf,
    /// Where `emcc` lives
    pub toolchain: ToolchainConfig,
}

impl BuildConfig {
    pub fn new(
        source_root: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
        toolchain: ToolchainConfig,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            output_root: output_root.into(),
            toolchain,
        }
    }

    /// Source and output roots taken from the project layout
    pub fn for_project(project: &Project, toolchain: &ToolchainConfig) -> Self {
        Self::new(project.source_dir(), project.output_dir(), toolchain.clone())
    }
}
