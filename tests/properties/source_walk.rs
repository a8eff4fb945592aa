//! Property tests for source enumeration.

use std::collections::BTreeSet;
use std::fs;

use proptest::prelude::*;
use tempfile::tempdir;

use emproj::enumerate_sources;

fn relative_file() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[a-z]{1,6}").unwrap();
    let ext = prop_oneof![Just(".c"), Just(".h"), Just(".txt"), Just("")];
    (proptest::collection::vec(segment, 1..=3), ext)
        .prop_map(|(segments, ext)| format!("{}{}", segments.join("/"), ext))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Enumeration yields exactly the `.c` files, each once.
    #[test]
    fn property_enumerates_every_c_file_once(
        files in proptest::collection::btree_set(relative_file(), 0..=8)
    ) {
        let dir = tempdir().unwrap();
        let mut written = BTreeSet::new();
        for file in &files {
            let path = dir.path().join(file);
            // A generated path may collide with a directory from another entry.
            if fs::create_dir_all(path.parent().unwrap()).is_err() || path.is_dir() {
                continue;
            }
            if fs::write(&path, "").is_ok() {
                written.insert(path);
            }
        }

        let expected: BTreeSet<_> = written
            .into_iter()
            .filter(|p| p.is_file() && p.to_string_lossy().ends_with(".c"))
            .collect();

        let found: Vec<_> = enumerate_sources(dir.path()).map(|unit| unit.path()).collect();
        let unique: BTreeSet<_> = found.iter().cloned().collect();

        prop_assert_eq!(found.len(), unique.len());
        prop_assert_eq!(unique, expected);
    }
}
