//! Status engine: outcome values and the bottom-up aggregation fold.
//!
//! One polymorphic rule, [`aggregate`], folds child statuses into a parent
//! status at both levels: subtask statuses into a task status and task
//! statuses into a team status. The `required` flag on a subtask is consulted
//! exactly once, in [`classify`], before statuses ever reach the fold;
//! `aggregate` itself only sees whatever statuses it is handed.

use crate::team::{Task, Team};
use serde::{Deserialize, Serialize};


/// Terminal or lifecycle outcome of a subtask, task, or team.
///
/// `PENDING` and `RUNNING` are caller-facing lifecycle markers before a
/// terminal status is known; the aggregation rules are defined over the four
/// terminal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Success.
    #[serde(rename = "GO")]
    Go,
    /// Blocking failure.
    #[serde(rename = "NO-GO")]
    NoGo,
    /// Non-blocking failure.
    #[serde(rename = "WARN")]
    Warn,
    /// Not evaluated.
    #[serde(rename = "SKIP")]
    Skip,
    /// Not started yet.
    #[serde(rename = "PENDING")]
    Pending,
    /// In progress.
    #[serde(rename = "RUNNING")]
    Running,
}

impl Status {
    /// Whether this is one of the four terminal values the fold is defined over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::Pending | Status::Running)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Go => write!(f, "GO"),
            Status::NoGo => write!(f, "NO-GO"),
            Status::Warn => write!(f, "WARN"),
            Status::Skip => write!(f, "SKIP"),
            Status::Pending => write!(f, "PENDING"),
            Status::Running => write!(f, "RUNNING"),
        }
    }
}

/// Raw result of evaluating one check, before required-ness is applied.
///
/// Produced by whatever executes the checks; this engine only classifies and
/// folds. Missing outcomes are treated as [`CheckOutcome::Skipped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckOutcome {
    Passed,
    Failed,
    Skipped,
}

/// Turn a raw check outcome into a status, applying the subtask's `required`
/// flag. This is the only place required-ness is consulted: a failed optional
/// check is WARN, a failed required check is NO-GO.
pub fn classify(outcome: CheckOutcome, required: bool) -> Status {
    match outcome {
        CheckOutcome::Passed => Status::Go,
        CheckOutcome::Skipped => Status::Skip,
        CheckOutcome::Failed if required => Status::NoGo,
        CheckOutcome::Failed => Status::Warn,
    }
}

/// Fold child statuses into a single parent status.
///
/// Precedence, in order:
/// 1. any NO-GO → NO-GO (one blocking failure blocks the parent);
/// 2. any non-terminal child → RUNNING (children are still in flight);
/// 3. all SKIP → SKIP (a parent that did nothing is skipped, not passing;
///    vacuously true for an empty child list);
/// 4. any WARN → WARN;
/// 5. otherwise GO.
///
/// The all-skip rule is checked before any-warn so a parent with only
/// skipped children is never miscategorized as passing, while a mix of skip
/// and warn (with no NO-GO) is WARN.
pub fn aggregate(children: &[Status]) -> Status {
    if children.contains(&Status::NoGo) {
        return Status::NoGo;
    }
    if children.iter().any(|s| !s.is_terminal()) {
        return Status::Running;
    }
    if children.iter().all(|s| *s == Status::Skip) {
        return Status::Skip;
    }
    if children.contains(&Status::Warn) {
        return Status::Warn;
    }
    Status::Go
}

/// Result of one subtask check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtaskResult {
    pub name: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub output: String,
}

impl SubtaskResult {
    /// A passing subtask result with no message.
    pub fn go(name: impl Into<String>) -> Self {
        Self::new(name, Status::Go, "")
    }

    /// A skipped subtask result.
    pub fn skip(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, Status::Skip, message)
    }

    pub fn new(name: impl Into<String>, status: Status, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            message: message.into(),
            output: String::new(),
        }
    }

    /// Attach captured check output.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }
}

/// Aggregated result of one task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResult {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub agent: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtasks: Vec<SubtaskResult>,
}

impl TaskResult {
    /// Fold subtask results into a task result for the given task.
    pub fn from_subtasks(task: &Task, subtasks: Vec<SubtaskResult>) -> Self {
        let statuses: Vec<Status> = subtasks.iter().map(|s| s.status).collect();
        Self {
            name: task.name.clone(),
            agent: task.agent.clone(),
            status: aggregate(&statuses),
            subtasks,
        }
    }
}

/// Aggregated result of a whole team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamResult {
    pub name: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<TaskResult>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
}

impl TeamResult {
    /// Fold task results into a team result for the given team.
    pub fn from_tasks(team: &Team, tasks: Vec<TaskResult>) -> Self {
        let statuses: Vec<Status> = tasks.iter().map(|t| t.status).collect();
        Self {
            name: team.name.clone(),
            status: aggregate(&statuses),
            tasks,
            version: team.version.clone(),
        }
    }
}
