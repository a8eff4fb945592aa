//! Source Unit
//!
//! One `.c` file found by the directory walk. Each unit is compiled on its own.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// A compilation unit: the containing directory plus the file name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceUnit {
    dir: PathBuf,
    file_name: OsString,
}

impl SourceUnit {
    pub fn new(dir: impl Into<PathBuf>, file_name: impl Into<OsString>) -> Self {
        Self {
            dir: dir.into(),
            file_name: file_name.into(),
        }
    }

    /// Directory containing the file
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Bare file name, e.g. `fib.c`; not necessarily UTF-8
    pub fn file_name(&self) -> &OsStr {
        &self.file_name
    }

    /// Full path handed to the compiler
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_joins_dir_and_file_name() {
        let unit = SourceUnit::new("/src/tests/c/nested", "loop.c");
        assert_eq!(unit.path(), PathBuf::from("/src/tests/c/nested/loop.c"));
        assert_eq!(unit.file_name(), "loop.c");
    }
}
