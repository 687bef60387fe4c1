//! Team data model for crewplan.
//!
//! A team is a declarative multi-agent workflow: a process type, an optional
//! manager, a list of participating agents, and an ordered list of tasks
//! connected by dependency edges. Teams are plain value aggregates: they own
//! their tasks exclusively, tasks own their subtasks exclusively, and nothing
//! here performs I/O or validation.
//!
//! Assembly and graph validation are deliberately separate steps. Builder
//! mutators only append, so intermediate states are allowed to be transiently
//! invalid (e.g., a task added before the task it depends on). Call
//! [`crate::graph::validate`] once assembly is complete.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

mod io;
mod task;

pub use task::{CheckKind, Subtask, Task};

/// Execution strategy for a team.
///
/// Unrecognized values are rejected at the serde boundary, so a constructed
/// `Process` is always one of the three recognized strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Process {
    /// Tasks run one at a time in dependency order.
    #[default]
    Sequential,
    /// Independent tasks may run concurrently, wave by wave.
    Parallel,
    /// A manager agent delegates tasks to the rest of the team.
    Hierarchical,
}

impl std::fmt::Display for Process {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Process::Sequential => write!(f, "sequential"),
            Process::Parallel => write!(f, "parallel"),
            Process::Hierarchical => write!(f, "hierarchical"),
        }
    }
}

/// A named multi-agent workflow.
///
/// Unknown fields in team files are preserved in the `extra` map for forward
/// compatibility, using BTreeMap for deterministic serialization order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Team name. Must be non-empty for a valid team.
    pub name: String,

    /// Human-readable description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Execution strategy.
    #[serde(default)]
    pub process: Process,

    /// Manager agent name. Required when `process` is hierarchical.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub manager: String,

    /// Names of the agents participating in this team.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agents: Vec<String>,

    /// Ordered list of tasks. Must be non-empty for a valid team.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<Task>,

    /// Team file version string.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,

    /// Any fields not explicitly defined above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Team {
    /// Create a new team with the given name and sequential process.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            process: Process::Sequential,
            manager: String::new(),
            agents: Vec::new(),
            tasks: Vec::new(),
            version: String::new(),
            extra: BTreeMap::new(),
        }
    }

    /// Set the execution process and return the team for chaining.
    pub fn with_process(mut self, process: Process) -> Self {
        self.process = process;
        self
    }

    /// Set the manager agent and return the team for chaining.
    pub fn with_manager(mut self, manager: impl Into<String>) -> Self {
        self.manager = manager.into();
        self
    }

    /// Append an agent name and return the team for chaining.
    pub fn add_agent(mut self, agent: impl Into<String>) -> Self {
        self.agents.push(agent.into());
        self
    }

    /// Append a task and return the team for chaining.
    ///
    /// No graph integrity is checked here; the task may depend on tasks
    /// that have not been added yet.
    pub fn add_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Find a task by name.
    pub fn get_task(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name == name)
    }

    /// All tasks assigned to the given agent, in their original order.
    pub fn agent_tasks(&self, agent: &str) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.agent == agent).collect()
    }
}
