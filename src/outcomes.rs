//! Outcome files: caller-supplied check results feeding the status engine.
//!
//! The engine never executes anything; an external executor records one
//! outcome per evaluated subtask and hands the file to `crewplan report`.
//! Subtasks with no recorded outcome are treated as skipped.
//!
//! # Outcome File Format
//!
//! YAML (or JSON) list of records:
//!
//! ```text
//! - task: build
//!   subtask: compile
//!   outcome: passed
//! - task: unit-tests
//!   subtask: run
//!   outcome: failed
//!   message: 3 tests failed
//!   output: "test result: FAILED. 120 passed; 3 failed"
//! ```

use crate::error::{CrewError, Result};
use crate::status::{CheckOutcome, SubtaskResult, TaskResult, TeamResult, classify};
use crate::team::Team;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One recorded check outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeRecord {
    /// Name of the task the subtask belongs to.
    pub task: String,

    /// Name of the subtask this outcome is for.
    pub subtask: String,

    /// Raw result of the check, before required-ness is applied.
    pub outcome: CheckOutcome,

    /// Short explanation, typically populated on failure.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,

    /// Captured check output.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub output: String,
}

/// A set of recorded outcomes for one team run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutcomeSet {
    pub records: Vec<OutcomeRecord>,
}

impl OutcomeSet {
    /// Load an outcome file from disk, selecting the parser by extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CrewError::UserError(format!(
                "failed to read outcome file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let parsed = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content).map_err(|e| e.to_string()),
            _ => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|e| {
            CrewError::UserError(format!(
                "failed to parse outcome file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Look up the recorded outcome for a subtask, if any.
    pub fn find(&self, task: &str, subtask: &str) -> Option<&OutcomeRecord> {
        self.records
            .iter()
            .find(|r| r.task == task && r.subtask == subtask)
    }

    /// Reject records that reference task or subtask names absent from the
    /// team, so typos in an outcome file fail loudly instead of silently
    /// skipping checks.
    pub fn check_against(&self, team: &Team) -> Result<()> {
        for record in &self.records {
            let Some(task) = team.get_task(&record.task) else {
                return Err(CrewError::UserError(format!(
                    "outcome file references unknown task '{}'",
                    record.task
                )));
            };
            if !task.subtasks.iter().any(|s| s.name == record.subtask) {
                return Err(CrewError::UserError(format!(
                    "outcome file references unknown subtask '{}' of task '{}'",
                    record.subtask, record.task
                )));
            }
        }
        Ok(())
    }
}

/// Fold an outcome set into a full team result tree.
///
/// Each subtask's raw outcome (skipped when unrecorded) is classified with
/// its `required` flag, then folded upward: subtasks into task statuses,
/// tasks into the team status.
pub fn build_team_result(team: &Team, outcomes: &OutcomeSet) -> Result<TeamResult> {
    outcomes.check_against(team)?;

    let mut task_results = Vec::with_capacity(team.tasks.len());
    for task in &team.tasks {
        let mut subtask_results = Vec::with_capacity(task.subtasks.len());
        for subtask in &task.subtasks {
            let result = match outcomes.find(&task.name, &subtask.name) {
                Some(record) => SubtaskResult::new(
                    &subtask.name,
                    classify(record.outcome, subtask.required),
                    &record.message,
                )
                .with_output(&record.output),
                None => SubtaskResult::skip(&subtask.name, "no outcome recorded"),
            };
            subtask_results.push(result);
        }
        task_results.push(TaskResult::from_subtasks(task, subtask_results));
    }

    Ok(TeamResult::from_tasks(team, task_results))
}
