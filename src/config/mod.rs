//! Configuration module for emproj
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (EMPROJ_VERBOSITY, EMCC_DIR)
//! 3. Project manifest (emproj.toml)
//! 4. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod toolchain;
mod types;

pub use env_validator::{closest_match, levenshtein, EnvVarValidator, MAX_SUGGESTION_DISTANCE};
pub use loader::{parse_verbosity_env, ConfigWarning, VERBOSITY_VAR};
pub use toolchain::{ToolchainConfig, EMCC_DIR_VAR};
pub use types::{Manifest, OutputConfig, ProjectEntry, Verbosity, MANIFEST_FILE};
