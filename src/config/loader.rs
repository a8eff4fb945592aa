//! Manifest loading and environment overrides

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EmprojError, EmprojResult};

use super::env_validator::{closest_match, EnvVarValidator, MAX_SUGGESTION_DISTANCE};
use super::types::{Manifest, Verbosity};

/// Environment variable overriding `[output] verbosity`
pub const VERBOSITY_VAR: &str = "EMPROJ_VERBOSITY";

const VERBOSITY_VALUES: &[&str] = &["quiet", "normal", "verbose", "debug"];

/// Non-fatal manifest warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load a manifest and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> EmprojResult<(Manifest, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let manifest: Manifest = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| EmprojError::InvalidManifest {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((manifest, warnings))
}

/// Apply environment variable overrides (EMPROJ_* prefix)
pub fn with_env_overrides(mut manifest: Manifest) -> Manifest {
    if let Ok(value) = std::env::var(VERBOSITY_VAR) {
        manifest.output.verbosity = parse_verbosity_env(&value, manifest.output.verbosity);
    }
    manifest
}

/// Parse an `EMPROJ_VERBOSITY` value, warning on stderr and keeping `fallback` if invalid
pub fn parse_verbosity_env(value: &str, fallback: Verbosity) -> Verbosity {
    EnvVarValidator::new(VERBOSITY_VAR, VERBOSITY_VALUES).parse(value, parse_verbosity, fallback)
}

fn parse_verbosity(value: &str) -> Option<Verbosity> {
    match value.trim().to_lowercase().as_str() {
        "quiet" => Some(Verbosity::Quiet),
        "normal" => Some(Verbosity::Normal),
        "verbose" => Some(Verbosity::Verbose),
        "debug" => Some(Verbosity::Debug),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

/// Every key the manifest understands, at any nesting level
const MANIFEST_KEYS: &[&str] = &[
    "output_base",
    "output",
    "verbosity",
    "project",
    "name",
    "sub_dir",
    "dir",
];

fn suggest_key(unknown: &str) -> Option<String> {
    closest_match(unknown, MANIFEST_KEYS, MAX_SUGGESTION_DISTANCE).map(str::to_string)
}
