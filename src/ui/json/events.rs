//! Shared JSON event types for consistent CLI output.
//!
//! All commands use these types for JSON output so field naming and
//! structure stay consistent across the CLI.

use std::path::Path;

use serde::Serialize;

use emproj::config::ConfigWarning;
use emproj::BuildEvent;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            duration_ms: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub code: &'a str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<&'static str>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            code,
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: Option<&'static str>) -> Self {
        self.help = help;
        self
    }
}

/// Non-fatal manifest warning.
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent<'a> {
    pub event: &'static str,
    pub key: &'a str,
    pub file: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<&'a str>,
}

impl<'a> From<&'a ConfigWarning> for WarningEvent<'a> {
    fn from(warning: &'a ConfigWarning) -> Self {
        Self {
            event: "warning",
            key: &warning.key,
            file: &warning.file,
            line: warning.line,
            suggestion: warning.suggestion.as_deref(),
        }
    }
}

/// Per-project lines of the non-build commands.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ProjectEvent<'a> {
    NeedsBuild {
        project: &'a str,
        required: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<&'a str>,
    },
    Clean {
        project: &'a str,
        removed: usize,
    },
    #[serde(rename = "result")]
    Artifact {
        project: &'a str,
        path: &'a Path,
    },
    Source {
        project: &'a str,
        source: &'a Path,
        js: &'a Path,
        wasm: &'a Path,
    },
}

/// Build progress as it appears on the NDJSON stream.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BuildProgressEvent<'a> {
    BuildStarted {
        project: &'a str,
        source_dir: &'a Path,
        output_dir: &'a Path,
    },
    UnitStarted {
        index: usize,
        source: &'a Path,
        command: &'a str,
    },
    UnitCompiled {
        index: usize,
        source: &'a Path,
        wasm: &'a Path,
    },
    BuildCompleted {
        project: &'a str,
        compiled: usize,
        duration_ms: u64,
    },
    BuildFailed {
        project: &'a str,
        error: &'a str,
    },
}

impl<'a> From<&'a BuildEvent> for BuildProgressEvent<'a> {
    fn from(event: &'a BuildEvent) -> Self {
        match event {
            BuildEvent::Started {
                project,
                source_dir,
                output_dir,
            } => Self::BuildStarted {
                project,
                source_dir,
                output_dir,
            },
            BuildEvent::UnitStarted {
                index,
                source,
                command,
            } => Self::UnitStarted {
                index: *index,
                source,
                command,
            },
            BuildEvent::UnitCompiled {
                index,
                source,
                wasm,
            } => Self::UnitCompiled {
                index: *index,
                source,
                wasm,
            },
            BuildEvent::Completed {
                project,
                compiled,
                duration_ms,
            } => Self::BuildCompleted {
                project,
                compiled: *compiled,
                duration_ms: *duration_ms,
            },
            BuildEvent::Failed { project, error } => Self::BuildFailed { project, error },
        }
    }
}
