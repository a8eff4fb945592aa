//! Integration tests for `emproj build`.

mod common;

use common::TestEnv;

#[test]
fn build_without_emcc_dir_fails_before_compiling() {
    let env = TestEnv::with_project("tests", "c");
    env.write_file("src/tests/c/a.c", "int main() { return 0; }\n");

    let result = env.run(&["build"]);

    assert!(!result.success, "build should fail:\n{}", result.combined_output());
    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("no EMCC_DIR specified"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(result.stderr.contains("help: Set EMCC_DIR"));
    assert!(!env.path("build/tests").exists());
}

#[test]
fn build_with_empty_emcc_dir_is_treated_as_unset() {
    let env = TestEnv::with_project("tests", "c");
    env.write_file("src/tests/c/a.c", "");

    let result = env.run_with_env(&["build"], &[("EMCC_DIR", "")]);

    assert!(!result.success);
    assert!(result.stderr.contains("no EMCC_DIR specified"));
}

#[test]
fn build_json_reports_missing_toolchain_code() {
    let env = TestEnv::with_project("tests", "c");
    env.write_file("src/tests/c/a.c", "");

    let result = env.run(&["build", "--json"]);
    assert!(!result.success);

    let events = result.json_lines();
    let last = events.last().expect("at least one event");
    assert_eq!(last["event"], "error");
    assert_eq!(last["code"], "missing_toolchain");
}

#[cfg(unix)]
mod with_stub {
    use super::common::TestEnv;

    #[test]
    fn compiles_every_source_with_one_call_each() {
        let env = TestEnv::with_project("tests", "c");
        env.install_stub_emcc(None);
        env.write_file("src/tests/c/a.c", "");
        env.write_file("src/tests/c/b.c", "");

        let result = env.run_with_toolchain(&["build"]);
        assert!(result.success, "{}", result.combined_output());

        let mut calls = env.recorded_calls();
        calls.sort();
        assert_eq!(
            calls,
            vec![
                "-Os src/tests/c/a.c -o build/tests/a.js".to_string(),
                "-Os src/tests/c/b.c -o build/tests/b.js".to_string(),
            ]
        );
        assert!(env.path("build/tests").is_dir());
        assert!(result.stderr.contains("Building tests with Emscripten"));
        assert!(result.stderr.contains("compiled 2 files"));
    }

    #[test]
    fn nested_sources_land_flat_in_the_output_dir() {
        let env = TestEnv::with_project("demo", "");
        env.install_stub_emcc(None);
        env.write_file("src/demo/x/y/z.c", "");
        env.write_file("src/demo/x/y/z.h", "");

        let result = env.run_with_toolchain(&["build"]);
        assert!(result.success, "{}", result.combined_output());

        let calls = env.recorded_calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].starts_with("-Os "), "{}", calls[0]);
        assert!(calls[0].contains("x/y/z.c"), "{}", calls[0]);
        assert!(calls[0].ends_with("-o build/demo/z.js"), "{}", calls[0]);
    }

    #[test]
    fn first_compiler_failure_aborts_the_build() {
        let env = TestEnv::with_project("tests", "c");
        env.install_stub_emcc(Some(0));
        env.write_file("src/tests/c/a.c", "");
        env.write_file("src/tests/c/b.c", "");

        let result = env.run_with_toolchain(&["build"]);

        assert!(!result.success);
        assert_eq!(env.recorded_calls().len(), 1);
        assert!(
            result.stderr.contains("failed to compile"),
            "stderr:\n{}",
            result.stderr
        );
        assert!(result.stderr.contains("compiler exited with status 3"));
    }

    #[test]
    fn empty_source_tree_builds_nothing() {
        let env = TestEnv::with_project("tests", "c");
        env.install_stub_emcc(None);

        let result = env.run_with_toolchain(&["build"]);

        assert!(result.success, "{}", result.combined_output());
        assert!(env.recorded_calls().is_empty());
        assert!(env.path("build/tests").is_dir());
    }

    #[test]
    fn rebuild_recompiles_everything() {
        let env = TestEnv::with_project("tests", "c");
        env.install_stub_emcc(None);
        env.write_file("src/tests/c/a.c", "");

        assert!(env.run_with_toolchain(&["build"]).success);
        assert!(env.run_with_toolchain(&["build"]).success);

        assert_eq!(env.recorded_calls().len(), 2);
    }

    #[test]
    fn json_build_emits_ndjson_stream() {
        let env = TestEnv::with_project("tests", "c");
        env.install_stub_emcc(None);
        env.write_file("src/tests/c/a.c", "");

        let result = env.run_with_toolchain(&["build", "--json"]);
        assert!(result.success, "{}", result.combined_output());

        let events = result.json_lines();
        let kinds: Vec<&str> = events
            .iter()
            .map(|e| e["event"].as_str().unwrap_or_default())
            .collect();
        assert_eq!(
            kinds,
            vec![
                "start",
                "build_started",
                "unit_started",
                "unit_compiled",
                "build_completed",
                "complete"
            ]
        );
        assert_eq!(events[0]["command"], "build");
        let expected_command = format!(
            "{} -Os src/tests/c/a.c -o build/tests/a.js",
            env.toolchain_dir().join("emcc").display()
        );
        assert_eq!(events[2]["command"], expected_command.as_str());
        assert_eq!(events[3]["wasm"], "build/tests/a.wasm");
        assert_eq!(events[4]["compiled"], 1);
        assert_eq!(events[5]["success"], true);
    }

    #[test]
    fn json_build_failure_ends_with_error_event() {
        let env = TestEnv::with_project("tests", "c");
        env.install_stub_emcc(Some(0));
        env.write_file("src/tests/c/a.c", "");

        let result = env.run_with_toolchain(&["build", "--json"]);
        assert!(!result.success);

        let events = result.json_lines();
        let kinds: Vec<&str> = events
            .iter()
            .map(|e| e["event"].as_str().unwrap_or_default())
            .collect();
        assert_eq!(kinds.first(), Some(&"start"));
        assert!(kinds.contains(&"build_failed"));
        assert_eq!(kinds.last(), Some(&"error"));
        assert_eq!(events.last().unwrap()["code"], "compile_failure");
    }

    #[test]
    fn project_flag_builds_only_the_named_project() {
        let env = TestEnv::new();
        env.write_manifest(
            "[[project]]\nname = \"one\"\n\n[[project]]\nname = \"two\"\n",
        );
        env.install_stub_emcc(None);
        env.write_file("src/one/a.c", "");
        env.write_file("src/two/b.c", "");

        let result = env.run_with_toolchain(&["build", "--project", "two"]);
        assert!(result.success, "{}", result.combined_output());

        let calls = env.recorded_calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].ends_with("-o build/two/b.js"), "{}", calls[0]);
        assert!(!env.path("build/one").exists());
    }

    #[test]
    fn verbose_build_lists_each_unit_and_debug_shows_commands() {
        let env = TestEnv::with_project("tests", "c");
        env.install_stub_emcc(None);
        env.write_file("src/tests/c/a.c", "");

        let verbose = env.run_with_toolchain(&["build", "-v"]);
        assert!(verbose.success);
        assert!(verbose.stderr.contains("build/tests/a.wasm"), "{}", verbose.stderr);
        assert!(!verbose.stderr.contains("$ "));

        let debug = env.run_with_toolchain(&["build", "-vv"]);
        assert!(debug.success);
        assert!(
            debug.stderr.contains("-Os src/tests/c/a.c -o build/tests/a.js"),
            "{}",
            debug.stderr
        );
    }

    #[test]
    fn json_build_forwards_compiler_stdout_to_stderr() {
        let env = TestEnv::with_project("tests", "c");
        env.install_chatty_stub_emcc("emcc: warning: optimizing for size");
        env.write_file("src/tests/c/a.c", "");

        let result = env.run_with_toolchain(&["build", "--json"]);
        assert!(result.success, "{}", result.combined_output());

        assert!(
            result.stderr.contains("emcc: warning: optimizing for size"),
            "stderr:\n{}",
            result.stderr
        );
        assert!(!result.stdout.contains("optimizing for size"));
        assert_eq!(result.json_lines().len(), 6);
    }

    #[test]
    fn text_build_passes_compiler_stdout_through() {
        let env = TestEnv::with_project("tests", "c");
        env.install_chatty_stub_emcc("emcc: warning: optimizing for size");
        env.write_file("src/tests/c/a.c", "");

        let result = env.run_with_toolchain(&["build"]);

        assert!(result.success, "{}", result.combined_output());
        assert!(result.stdout.contains("emcc: warning: optimizing for size"));
    }

    #[test]
    fn symlinked_source_is_compiled() {
        let env = TestEnv::with_project("tests", "c");
        env.install_stub_emcc(None);
        env.write_file("shared/impl.txt", "");
        std::fs::create_dir_all(env.path("src/tests/c")).unwrap();
        std::os::unix::fs::symlink(env.path("shared/impl.txt"), env.path("src/tests/c/link.c"))
            .unwrap();

        let result = env.run_with_toolchain(&["build"]);
        assert!(result.success, "{}", result.combined_output());

        assert_eq!(
            env.recorded_calls(),
            vec!["-Os src/tests/c/link.c -o build/tests/link.js".to_string()]
        );
    }
}
