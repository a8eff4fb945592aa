//! Manifest type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::Project;
use crate::error::{EmprojError, EmprojResult};

use super::loader::{self, ConfigWarning};

/// Default manifest file name
pub const MANIFEST_FILE: &str = "emproj.toml";

/// One `[[project]]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,

    /// Subdirectory of `src/<name>` holding the sources
    #[serde(default)]
    pub sub_dir: PathBuf,

    /// Project directory; defaults to the manifest's directory
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Map a `-v` count onto a level (0 keeps `base`)
    pub fn from_count(count: u8, base: Verbosity) -> Verbosity {
        match count {
            0 => base,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }
}

/// Contents of `emproj.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Root under which each project gets its own output directory
    #[serde(default = "default_output_base")]
    pub output_base: PathBuf,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default, rename = "project")]
    pub projects: Vec<ProjectEntry>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output_base: default_output_base(),
            output: OutputConfig::default(),
            projects: Vec::new(),
        }
    }
}

fn default_output_base() -> PathBuf {
    PathBuf::from("build")
}

impl Manifest {
    /// Load a manifest from a TOML file
    pub fn load(path: &Path) -> EmprojResult<Self> {
        let (manifest, _warnings) = loader::load_with_warnings(path)?;
        Ok(manifest)
    }

    /// Load a manifest and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> EmprojResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (EMPROJ_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Build the projects to act on
    ///
    /// Relative paths resolve against the manifest's directory. An empty
    /// `selected` means every declared project, in declaration order;
    /// otherwise the named projects in the order given.
    pub fn resolve_projects(
        &self,
        manifest_path: &Path,
        selected: &[String],
    ) -> EmprojResult<Vec<Project>> {
        if self.projects.is_empty() {
            return Err(EmprojError::NoProjects {
                file: manifest_path.to_path_buf(),
            });
        }

        let base_dir = manifest_path.parent().unwrap_or(Path::new("."));
        let output_base = base_dir.join(&self.output_base);

        let to_project = |entry: &ProjectEntry| {
            let dir = match &entry.dir {
                Some(dir) => base_dir.join(dir),
                None => base_dir.to_path_buf(),
            };
            Project::new(&entry.name, dir, &entry.sub_dir, &output_base)
        };

        if selected.is_empty() {
            return Ok(self.projects.iter().map(to_project).collect());
        }

        selected
            .iter()
            .map(|name| {
                self.projects
                    .iter()
                    .find(|entry| &entry.name == name)
                    .map(to_project)
                    .ok_or_else(|| EmprojError::UnknownProject { name: name.clone() })
            })
            .collect()
    }
}
