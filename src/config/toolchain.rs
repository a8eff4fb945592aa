//! Toolchain configuration
//!
//! The Emscripten toolchain location comes from `EMCC_DIR`. It is read once at
//! the edge and handed to the build explicitly.

use std::path::{Path, PathBuf};

use crate::error::{EmprojError, EmprojResult};

/// Environment variable naming the directory that contains `emcc`
pub const EMCC_DIR_VAR: &str = "EMCC_DIR";

/// Location of the Emscripten toolchain, if configured
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolchainConfig {
    emcc_dir: Option<PathBuf>,
}

impl ToolchainConfig {
    /// Toolchain rooted at `emcc_dir`
    pub fn new(emcc_dir: impl Into<PathBuf>) -> Self {
        Self {
            emcc_dir: Some(emcc_dir.into()),
        }
    }

    /// No toolchain configured
    pub fn unset() -> Self {
        Self::default()
    }

    /// Read `EMCC_DIR` from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve through an arbitrary lookup; an empty value counts as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let emcc_dir = lookup(EMCC_DIR_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self { emcc_dir }
    }

    /// The toolchain directory, or `MissingToolchain`
    pub fn emcc_dir(&self) -> EmprojResult<&Path> {
        self.emcc_dir
            .as_deref()
            .ok_or(EmprojError::MissingToolchain)
    }

    pub fn is_configured(&self) -> bool {
        self.emcc_dir.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_reads_emcc_dir() {
        let config = ToolchainConfig::from_lookup(|key| {
            (key == EMCC_DIR_VAR).then(|| "/opt/emsdk/upstream/emscripten".to_string())
        });
        assert_eq!(
            config.emcc_dir().unwrap(),
            Path::new("/opt/emsdk/upstream/emscripten")
        );
    }

    #[test]
    fn missing_value_is_missing_toolchain() {
        let config = ToolchainConfig::from_lookup(|_| None);
        assert!(!config.is_configured());
        assert!(matches!(
            config.emcc_dir(),
            Err(EmprojError::MissingToolchain)
        ));
    }

    #[test]
    fn empty_value_is_missing_toolchain() {
        let config = ToolchainConfig::from_lookup(|_| Some(String::new()));
        assert!(config.emcc_dir().is_err());
    }
}
