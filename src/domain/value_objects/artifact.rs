//! Artifact naming
//!
//! Maps a source file name to the files the compiler produces for it.
//! The mapping only looks at the file name, so outputs from different
//! source subdirectories share one flat namespace.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::{EmprojError, EmprojResult};

/// The only suffix recognised as a compilation unit
pub const SOURCE_SUFFIX: &str = ".c";

/// Strip the trailing `.c` from a source file name
///
/// Only the literal two-character `.c` suffix is accepted. Any other name
/// fails with `UnsupportedExtension`, including `.C`, `.cc` and names with
/// no extension at all. Names need not be valid UTF-8.
pub fn derive_base<S: AsRef<OsStr> + ?Sized>(file_name: &S) -> EmprojResult<&OsStr> {
    let file_name = file_name.as_ref();
    strip_source_suffix(file_name).ok_or_else(|| EmprojError::UnsupportedExtension {
        file_name: file_name.to_string_lossy().into_owned(),
    })
}

/// Whether `file_name` ends in the literal `.c` suffix
pub fn has_source_suffix(file_name: &OsStr) -> bool {
    file_name
        .as_encoded_bytes()
        .ends_with(SOURCE_SUFFIX.as_bytes())
}

#[cfg(unix)]
fn strip_source_suffix(file_name: &OsStr) -> Option<&OsStr> {
    use std::os::unix::ffi::OsStrExt;

    file_name
        .as_bytes()
        .strip_suffix(SOURCE_SUFFIX.as_bytes())
        .map(OsStr::from_bytes)
}

#[cfg(not(unix))]
fn strip_source_suffix(file_name: &OsStr) -> Option<&OsStr> {
    file_name
        .to_str()?
        .strip_suffix(SOURCE_SUFFIX)
        .map(OsStr::new)
}

/// Output paths for one compilation unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Target passed to `emcc -o`; emcc writes the `.wasm` next to it
    pub js: PathBuf,
    /// Declared result of the build
    pub wasm: PathBuf,
}

/// Derive both artifact paths for `file_name` inside `output_dir`
pub fn derive_artifact_paths<S: AsRef<OsStr> + ?Sized>(
    output_dir: &Path,
    file_name: &S,
) -> EmprojResult<ArtifactPaths> {
    let base = derive_base(file_name)?;
    let with_ext = |ext: &str| {
        let mut name = OsString::from(base);
        name.push(ext);
        output_dir.join(name)
    };
    Ok(ArtifactPaths {
        js: with_ext(".js"),
        wasm: with_ext(".wasm"),
    })
}
