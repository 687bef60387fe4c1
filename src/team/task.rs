//! Task and subtask value types.

use serde::{Deserialize, Serialize};

/// The kind of check a subtask performs.
///
/// A subtask's kind is derived from which of its fields are set, never
/// stored. When more than one field is set, the priority order is
/// command > pattern > file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    /// Run a command and check its exit status.
    Command,
    /// Search for a pattern in the files matched by the subtask's glob.
    Pattern,
    /// Check that a specific file exists.
    File,
    /// None of the check fields are set.
    Unclassified,
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckKind::Command => write!(f, "command"),
            CheckKind::Pattern => write!(f, "pattern"),
            CheckKind::File => write!(f, "file"),
            CheckKind::Unclassified => write!(f, "unclassified"),
        }
    }
}

/// One atomic pass/fail check within a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subtask {
    /// Subtask name, unique within its task.
    pub name: String,

    /// Human-readable description of what the check verifies.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Command to run (command-kind check).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub command: String,

    /// Pattern to search for (pattern-kind check).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pattern: String,

    /// Glob scoping which files the pattern check searches.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub files: String,

    /// File whose existence is checked (file-kind check).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub file: String,

    /// Whether a failure of this check blocks the task.
    ///
    /// Optional checks that fail are reported as WARN rather than NO-GO
    /// by the classification step.
    #[serde(default = "default_required")]
    pub required: bool,

    /// Expected output of a command check, for an external executor to compare.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub expected_output: String,

    /// Advisory timeout for an external executor. Not enforced here.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub timeout_seconds: u64,
}

fn default_required() -> bool {
    true
}

fn is_zero(v: &u64) -> bool {
    *v == 0
}

impl Subtask {
    /// Create a new subtask with the given name. All check fields start empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            command: String::new(),
            pattern: String::new(),
            files: String::new(),
            file: String::new(),
            required: true,
            expected_output: String::new(),
            timeout_seconds: 0,
        }
    }

    /// Derive the check kind from the populated fields.
    pub fn kind(&self) -> CheckKind {
        if !self.command.is_empty() {
            CheckKind::Command
        } else if !self.pattern.is_empty() {
            CheckKind::Pattern
        } else if !self.file.is_empty() {
            CheckKind::File
        } else {
            CheckKind::Unclassified
        }
    }
}

/// One unit of work bound to an agent.
///
/// A task's identity is its name. Dependencies reference other tasks in the
/// same team by name; referential integrity is checked by graph validation,
/// not at assembly time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Task name, unique within its team.
    pub name: String,

    /// Human-readable description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Name of the agent assigned to this task.
    ///
    /// Not checked against the team's agent list; lint flags mismatches
    /// as advisory warnings.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub agent: String,

    /// Names of tasks that must complete before this one starts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,

    /// Ordered list of checks that make up this task.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtasks: Vec<Subtask>,

    /// Declared inputs, for documentation and external executors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<String>,

    /// Declared outputs, for documentation and external executors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<String>,
}

impl Task {
    /// Create a new task bound to the given agent.
    pub fn new(name: impl Into<String>, agent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            agent: agent.into(),
            depends_on: Vec::new(),
            subtasks: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Append a subtask and return the task for chaining.
    pub fn add_subtask(mut self, subtask: Subtask) -> Self {
        self.subtasks.push(subtask);
        self
    }

    /// Append a dependency on another task by name and return the task for chaining.
    pub fn add_dependency(mut self, task_name: impl Into<String>) -> Self {
        self.depends_on.push(task_name.into());
        self
    }
}
