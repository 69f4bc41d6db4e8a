//! Types exchanged with the task lifecycle engine.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use tokio_util::sync::CancellationToken;

use crate::error::HookError;
use crate::names;

const CONNECT_NATIVE_PREFIX: &str = "connect-native";

/// The `<kind>:<value>` tag the scheduler attaches to a task,
/// e.g. `connect-native:web`. Empty for ordinary tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskKind(String);

impl TaskKind {
    pub fn new(kind: &str, value: &str) -> Self {
        Self(format!("{kind}:{value}"))
    }

    pub fn connect_native(service: &str) -> Self {
        Self::new(CONNECT_NATIVE_PREFIX, service)
    }

    pub fn parse(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn is_connect_native(&self) -> bool {
        self.0
            .split_once(':')
            .is_some_and(|(kind, _)| kind == CONNECT_NATIVE_PREFIX)
    }

    /// The part after the colon (the service name for mesh kinds).
    pub fn value(&self) -> &str {
        self.0.split_once(':').map(|(_, v)| v).unwrap_or("")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub kind: TaskKind,
}

/// Directories the lifecycle engine created for a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDir {
    pub dir: PathBuf,
    /// Secrets directory on the host.
    pub secrets_dir: PathBuf,
    /// Secrets directory as the task sees it.
    pub task_secrets_dir: PathBuf,
}

impl TaskDir {
    /// Standard layout: `<dir>/secrets`, mounted at `/secrets` in the task.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            secrets_dir: dir.join("secrets"),
            task_secrets_dir: PathBuf::from(names::TASK_SECRETS_DIR),
            dir,
        }
    }

    /// Override the in-task path, for drivers that do not remap the secrets dir.
    pub fn with_task_secrets_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.task_secrets_dir = path.into();
        self
    }

    pub fn secrets_dir(&self) -> &Path {
        &self.secrets_dir
    }
}

#[derive(Debug, Clone)]
pub struct PrestartRequest {
    pub task: Task,
    pub task_dir: TaskDir,
    /// Variables from the task's own env stanza.
    pub task_env: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrestartResponse {
    /// Variables to add to the task's environment.
    pub env: HashMap<String, String>,
    /// The hook has finished and must not be run again.
    pub done: bool,
}

/// Implemented by each hook that runs before a task starts.
pub trait PrestartHook: Send + Sync {
    fn name(&self) -> &str;

    fn prestart(
        &self,
        cancel: &CancellationToken,
        request: &PrestartRequest,
        response: &mut PrestartResponse,
    ) -> Result<(), HookError>;
}
