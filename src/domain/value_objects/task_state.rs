//! Build task lifecycle

use std::fmt;

/// Lifecycle of a build task
///
/// There are no partial or retry states: a task either runs every unit
/// successfully or stops at the first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskState {
    #[default]
    NotStarted,
    Done,
    Aborted,
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskState::NotStarted => write!(f, "not started"),
            TaskState::Done => write!(f, "done"),
            TaskState::Aborted => write!(f, "aborted"),
        }
    }
}

/// Answer to "does this project need building?"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebuildCheck {
    pub required: bool,
    /// Why a rebuild is required, when known
    pub reason: Option<String>,
}

impl RebuildCheck {
    /// Results are never cached, so every check asks for a rebuild
    pub fn always() -> Self {
        Self {
            required: true,
            reason: Some("build outputs are not tracked".to_string()),
        }
    }
}
