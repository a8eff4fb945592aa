//! Project Entity
//!
//! A named directory of C sources whose artifacts land in one flat output directory.

use std::path::{Path, PathBuf};

/// An Emscripten source-file project
///
/// Layout:
/// - sources: `<dir>/src/<name>/<sub_dir>`
/// - outputs: `<output_base>/<name>`
///
/// Constructed once from configuration and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
    dir: PathBuf,
    sub_dir: PathBuf,
    output_base: PathBuf,
}

impl Project {
    pub fn new(
        name: impl Into<String>,
        dir: impl Into<PathBuf>,
        sub_dir: impl Into<PathBuf>,
        output_base: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
            sub_dir: sub_dir.into(),
            output_base: output_base.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn sub_dir(&self) -> &Path {
        &self.sub_dir
    }

    pub fn output_base(&self) -> &Path {
        &self.output_base
    }

    /// Root of the source tree walked for compilation units
    pub fn source_dir(&self) -> PathBuf {
        self.dir.join("src").join(&self.name).join(&self.sub_dir)
    }

    /// Directory every artifact is written to (flat, no subdirectories)
    pub fn output_dir(&self) -> PathBuf {
        self.output_base.join(&self.name)
    }
}
