//! Graph engine: structural validation, topological ordering, and wave
//! partitioning over a team's task list.
//!
//! All functions here are pure and synchronous: they perform no I/O, spawn
//! nothing, and treat the team as immutable for the duration of one call.
//! The wave partition is advisory; an external scheduler decides how tasks
//! actually run.
//!
//! Validation and cycle detection are split deliberately: [`validate`] checks
//! structural invariants (naming, process requirements, referential integrity
//! of dependencies) and stops at the first violation, while
//! [`topological_sort`] is the authoritative acyclicity check. A caller that
//! needs to confirm acyclicity without consuming the order still calls
//! `topological_sort` and treats its error as an additional validation signal.

use crate::team::{Process, Task, Team};
use std::collections::{HashMap, HashSet, VecDeque};
use thiserror::Error;


/// A structural validation failure: the first violated invariant, identified
/// by the team field it concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid team: {field}: {message}")]
pub struct ValidationError {
    /// The team field the violation concerns (e.g., "name", "tasks").
    pub field: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The task graph contains at least one dependency cycle.
///
/// Carries the names of the tasks that could not be scheduled (those never
/// dequeued by Kahn's algorithm), in their original team order, to aid
/// debugging. A task with a dependency on a missing task also shows up here
/// when [`validate`] was skipped, since it can never become ready.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("circular dependency among tasks: {}", .unresolved.join(", "))]
pub struct CycleError {
    /// Tasks that never became ready, in team order.
    pub unresolved: Vec<String>,
}

impl CycleError {
    pub fn new(unresolved: Vec<String>) -> Self {
        Self { unresolved }
    }
}

/// Validate a team's structural invariants.
///
/// Checks, in order: the team name is non-empty; a hierarchical team names a
/// manager; the task list is non-empty; and every dependency names another
/// task present in the team (no self-loops, no dangling references). The
/// process field needs no check here: [`Process`] is a closed enum, so
/// unrecognized values are rejected at the serde boundary.
///
/// Returns the first violation only. Cycle detection is not performed here;
/// call [`topological_sort`] for the authoritative acyclicity check.
pub fn validate(team: &Team) -> Result<(), ValidationError> {
    if team.name.is_empty() {
        return Err(ValidationError::new("name", "team name must not be empty"));
    }

    if team.process == Process::Hierarchical && team.manager.is_empty() {
        return Err(ValidationError::new(
            "manager",
            "hierarchical process requires a manager agent",
        ));
    }

    if team.tasks.is_empty() {
        return Err(ValidationError::new(
            "tasks",
            "team must have at least one task",
        ));
    }

    let names: HashSet<&str> = team.tasks.iter().map(|t| t.name.as_str()).collect();
    for task in &team.tasks {
        for dep in &task.depends_on {
            if dep == &task.name {
                return Err(ValidationError::new(
                    "tasks",
                    format!("task '{}' depends on itself", task.name),
                ));
            }
            if !names.contains(dep.as_str()) {
                return Err(ValidationError::new(
                    "tasks",
                    format!("task '{}' depends on unknown task '{}'", task.name, dep),
                ));
            }
        }
    }

    Ok(())
}

/// Compute a dependency-respecting serial order over the team's tasks.
///
/// Implements Kahn's algorithm. The ready queue is seeded with all tasks of
/// in-degree zero in their original `team.tasks` order, which makes the
/// result deterministic for a given input order: ties among simultaneously
/// ready tasks are broken by list position.
///
/// This is the sole cycle-detection mechanism in the engine. If any task is
/// never dequeued, the graph contains a cycle and the call fails with the
/// unresolved task names; there is no best-effort partial order.
pub fn topological_sort(team: &Team) -> Result<Vec<&Task>, CycleError> {
    let index: HashMap<&str, usize> = team
        .tasks
        .iter()
        .enumerate()
        .map(|(i, t)| (t.name.as_str(), i))
        .collect();

    // In-degree per task and adjacency from each task to its dependents,
    // both keyed by list position. Duplicate dependency entries count once.
    let mut in_degree = vec![0usize; team.tasks.len()];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); team.tasks.len()];

    for (i, task) in team.tasks.iter().enumerate() {
        let mut seen: HashSet<&str> = HashSet::new();
        for dep in &task.depends_on {
            if !seen.insert(dep.as_str()) {
                continue;
            }
            in_degree[i] += 1;
            if let Some(&d) = index.get(dep.as_str()) {
                dependents[d].push(i);
            }
        }
    }

    let mut queue: VecDeque<usize> = (0..team.tasks.len())
        .filter(|&i| in_degree[i] == 0)
        .collect();

    let mut order: Vec<&Task> = Vec::with_capacity(team.tasks.len());
    let mut emitted = vec![false; team.tasks.len()];

    while let Some(i) = queue.pop_front() {
        order.push(&team.tasks[i]);
        emitted[i] = true;

        for &dep in &dependents[i] {
            in_degree[dep] -= 1;
            if in_degree[dep] == 0 {
                queue.push_back(dep);
            }
        }
    }

    if order.len() < team.tasks.len() {
        let unresolved = team
            .tasks
            .iter()
            .enumerate()
            .filter(|(i, _)| !emitted[*i])
            .map(|(_, t)| t.name.clone())
            .collect();
        return Err(CycleError::new(unresolved));
    }

    Ok(order)
}

/// Partition the team's tasks into maximal-concurrency waves.
///
/// Each task's wave index is its longest path from a root:
/// `level(t) = 1 + max(level(d))` over its dependencies, zero when it has
/// none. A task with dependencies at levels 1 and 3 lands at level 4: every
/// dependency, not just one, must have completed before it may start. Tasks
/// within one wave have no dependency relationship, direct or transitive,
/// and are safe to run concurrently; waves must run in index order.
///
/// Within a wave, tasks keep their `team.tasks` order. Propagates the cycle
/// error from [`topological_sort`]; there is no partial partition.
pub fn parallel_groups(team: &Team) -> Result<Vec<Vec<&Task>>, CycleError> {
    let order = topological_sort(team)?;

    // The sort guarantees dependencies are processed before dependents, so
    // a single pass in sorted order sees every dependency level first.
    let mut levels: HashMap<&str, usize> = HashMap::with_capacity(order.len());
    for task in &order {
        let level = task
            .depends_on
            .iter()
            .filter_map(|dep| levels.get(dep.as_str()))
            .map(|&l| l + 1)
            .max()
            .unwrap_or(0);
        levels.insert(task.name.as_str(), level);
    }

    let wave_count = levels.values().map(|&l| l + 1).max().unwrap_or(0);
    let mut waves: Vec<Vec<&Task>> = vec![Vec::new(); wave_count];
    for task in &team.tasks {
        waves[levels[task.name.as_str()]].push(task);
    }

    Ok(waves)
}
