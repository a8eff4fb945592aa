//! Source file collection
//!
//! Walks a project's source tree and yields every `.c` file as a `SourceUnit`.
//!
//! The walk is permissive: a missing root or an unreadable entry is skipped
//! rather than reported, so an absent source tree simply has no units.
//! Hidden files and ignore files are not consulted; every `.c` file counts,
//! including symlinks to files and names that are not valid UTF-8.

use std::path::{Path, PathBuf};

use ignore::{DirEntry, Walk, WalkBuilder};

use crate::domain::entities::SourceUnit;
use crate::domain::value_objects::has_source_suffix;

/// Enumerate every `.c` file under `root`
///
/// The returned iterator is lazy and walks the filesystem on each call.
/// Order follows the underlying traversal and must not be relied on.
pub fn enumerate_sources(root: &Path) -> SourceIter {
    SourceFileCollection::new(root).iter()
}

/// Restartable view over the `.c` files of one directory tree
#[derive(Debug, Clone)]
pub struct SourceFileCollection {
    root: PathBuf,
}

impl SourceFileCollection {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Start a fresh walk of the tree (nothing is cached between calls)
    pub fn iter(&self) -> SourceIter {
        let walk = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .build();
        SourceIter { walk }
    }
}

impl<'a> IntoIterator for &'a SourceFileCollection {
    type Item = SourceUnit;
    type IntoIter = SourceIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the source units of one walk
pub struct SourceIter {
    walk: Walk,
}

impl Iterator for SourceIter {
    type Item = SourceUnit;

    fn next(&mut self) -> Option<SourceUnit> {
        for entry in self.walk.by_ref() {
            let Ok(entry) = entry else { continue };

            if !is_source_file(&entry) {
                continue;
            }

            let dir = entry
                .path()
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            return Some(SourceUnit::new(dir, entry.file_name()));
        }
        None
    }
}

/// A `.c` name on a regular file, or on a symlink that resolves to one
///
/// Symlinked directories are never descended into.
fn is_source_file(entry: &DirEntry) -> bool {
    if !has_source_suffix(entry.file_name()) {
        return false;
    }
    if entry.path_is_symlink() {
        return entry.path().is_file();
    }
    entry.file_type().is_some_and(|ft| ft.is_file())
}
