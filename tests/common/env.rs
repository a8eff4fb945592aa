//! Test environment builder for isolated emproj testing.
//!
//! `TestEnv` owns a temp directory laid out as a project root:
//!
//! ```text
//! <root>/emproj.toml
//! <root>/src/<name>/<sub_dir>/*.c
//! <root>/toolchain/emcc        (stub, unix only)
//! <root>/emcc-calls.log        (one line per stub invocation)
//! ```

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running an emproj CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every non-empty stdout line as JSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("not JSON: {line:?} ({e})\n{}", self.stdout))
            })
            .collect()
    }
}

/// Isolated project root with helpers to run the emproj binary
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_emproj")),
        }
    }

    /// Project with a single `[[project]]` table
    pub fn with_project(name: &str, sub_dir: &str) -> Self {
        let env = Self::new();
        env.write_manifest(&format!(
            "[[project]]\nname = \"{name}\"\nsub_dir = \"{sub_dir}\"\n"
        ));
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write_manifest(&self, content: &str) {
        self.write_file("emproj.toml", content);
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Directory that will hold the stub compiler
    pub fn toolchain_dir(&self) -> PathBuf {
        self.path("toolchain")
    }

    pub fn calls_log(&self) -> PathBuf {
        self.path("emcc-calls.log")
    }

    /// Install a stub `emcc` that logs its arguments and exits 3 once it
    /// has been called more than `fail_after` times (never, if `None`).
    #[cfg(unix)]
    pub fn install_stub_emcc(&self, fail_after: Option<usize>) {
        let fail_check = match fail_after {
            Some(n) => format!(
                "if [ \"$(wc -l < '{log}')\" -gt {n} ]; then exit 3; fi\n",
                log = self.calls_log().display()
            ),
            None => String::new(),
        };
        self.write_stub(&fail_check);
    }

    /// Install a stub `emcc` that logs its arguments and prints `line` on stdout
    #[cfg(unix)]
    pub fn install_chatty_stub_emcc(&self, line: &str) {
        self.write_stub(&format!("echo '{line}'\n"));
    }

    #[cfg(unix)]
    fn write_stub(&self, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            "#!/bin/sh\necho \"$@\" >> '{log}'\n{body}exit 0\n",
            log = self.calls_log().display()
        );

        let stub = self.toolchain_dir().join("emcc");
        std::fs::create_dir_all(self.toolchain_dir()).expect("Failed to create toolchain dir");
        std::fs::write(&stub, script).expect("Failed to write stub");
        std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod stub");
    }

    /// Argument lines recorded by the stub, in call order
    pub fn recorded_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.calls_log())
            .map(|content| content.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Run with `EMCC_DIR` removed from the environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run with `EMCC_DIR` pointing at the stub toolchain
    pub fn run_with_toolchain(&self, args: &[&str]) -> TestResult {
        let dir = self.toolchain_dir();
        self.run_with_env(args, &[("EMCC_DIR", dir.to_str().expect("utf-8 temp path"))])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env_remove("EMCC_DIR")
            .env_remove("EMPROJ_VERBOSITY")
            .env_remove("GITHUB_ACTIONS");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute emproj");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
