//! Output directory creation

use std::io;
use std::path::Path;

/// Create `path` and its parents, succeeding if it already is a directory
///
/// Fails when a non-directory occupies the path or the OS refuses creation;
/// the underlying `io::Error` is returned unchanged.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    match std::fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => Err(e),
    }
}
