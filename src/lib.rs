//! Crewplan: declarative multi-agent team workflows.
//!
//! A team names its agents and an ordered list of tasks connected by
//! dependency edges; each task decomposes into subtasks representing
//! individual pass/fail checks. This crate is the planning and aggregation
//! engine over that model:
//!
//! - [`team`]: the Team/Task/Subtask value aggregates and team file I/O
//! - [`graph`]: structural validation, topological ordering, and wave
//!   partitioning
//! - [`status`]: outcome classification and the bottom-up status fold
//! - [`outcomes`]: caller-recorded check outcomes feeding the status engine
//! - [`lint`]: advisory declaration checks
//! - [`report`]: human-readable rendering
//! - [`cli`] / [`commands`]: the thin `crewplan` binary surface
//!
//! The engine never executes agents or checks, spawns nothing, and persists
//! nothing: it plans runs and folds outcomes an external executor supplies.

pub mod cli;
pub mod commands;
pub mod error;
pub mod exit_codes;
pub mod graph;
pub mod lint;
pub mod outcomes;
pub mod report;
pub mod status;
pub mod team;
