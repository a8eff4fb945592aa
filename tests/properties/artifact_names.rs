//! Property tests for base-name and artifact path derivation.

use std::path::Path;

use proptest::prelude::*;

use emproj::{derive_artifact_paths, derive_base};

fn file_stem() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{0,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Stripping `.c` gives back exactly what preceded it.
    #[test]
    fn property_derive_base_strips_one_suffix(stem in file_stem()) {
        let name = format!("{stem}.c");
        prop_assert_eq!(derive_base(&name).unwrap(), stem.as_str());
    }

    /// PROPERTY: Any name not ending in `.c` is rejected.
    #[test]
    fn property_other_names_are_rejected(name in "(?s).{0,64}") {
        prop_assume!(!name.ends_with(".c"));
        prop_assert!(derive_base(&name).is_err());
    }

    /// PROPERTY: `derive_base` never panics on arbitrary input.
    #[test]
    fn property_derive_base_never_panics(name in "(?s).{0,256}") {
        let _ = derive_base(&name);
    }

    /// PROPERTY: Both artifacts share the output dir and the base name.
    #[test]
    fn property_artifacts_share_dir_and_base(stem in "[A-Za-z0-9_-]{1,24}") {
        let out = Path::new("out/project");
        let paths = derive_artifact_paths(out, &format!("{stem}.c")).unwrap();

        prop_assert_eq!(paths.js.parent(), Some(out));
        prop_assert_eq!(paths.wasm.parent(), Some(out));
        prop_assert_eq!(paths.js.file_stem(), paths.wasm.file_stem());
        prop_assert_eq!(paths.js.extension().and_then(|e| e.to_str()), Some("js"));
        prop_assert_eq!(paths.wasm.extension().and_then(|e| e.to_str()), Some("wasm"));
    }
}
