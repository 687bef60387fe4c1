//! CLI argument parsing for crewplan.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Crewplan: declarative multi-agent team workflows.
///
/// Teams are declared in YAML or JSON files: named tasks bound to agents,
/// connected by dependency edges, each decomposing into pass/fail checks.
/// Crewplan validates the task graph, computes execution plans, and folds
/// recorded check outcomes into a GO/NO-GO report.
#[derive(Parser, Debug)]
#[command(name = "crewplan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for crewplan.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a team file.
    ///
    /// Checks structural invariants (naming, manager requirement, dependency
    /// references) and confirms the task graph is acyclic.
    Validate(ValidateArgs),

    /// Compute an execution plan for a team.
    ///
    /// Prints the dependency-respecting serial order, or with --waves the
    /// partition into maximal-concurrency waves.
    Plan(PlanArgs),

    /// Show a team summary.
    ///
    /// Displays the process, manager, agents, and per-agent task breakdown.
    Show(ShowArgs),

    /// Run advisory declaration checks on a team file.
    ///
    /// Compiles patterns and globs, word-splits commands, and flags naming
    /// or agent-list inconsistencies. Nothing is executed.
    Lint(LintArgs),

    /// Fold recorded check outcomes into a team report.
    ///
    /// Classifies each outcome with its subtask's required flag, aggregates
    /// bottom-up, and exits non-zero when the team is NO-GO.
    Report(ReportArgs),
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the team file (.yaml, .yml, or .json).
    pub team_file: PathBuf,
}

/// Arguments for the `plan` command.
#[derive(Parser, Debug)]
pub struct PlanArgs {
    /// Path to the team file (.yaml, .yml, or .json).
    pub team_file: PathBuf,

    /// Print the wave partition instead of the serial order.
    #[arg(long)]
    pub waves: bool,

    /// Emit machine-readable JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Path to the team file (.yaml, .yml, or .json).
    pub team_file: PathBuf,
}

/// Arguments for the `lint` command.
#[derive(Parser, Debug)]
pub struct LintArgs {
    /// Path to the team file (.yaml, .yml, or .json).
    pub team_file: PathBuf,
}

/// Arguments for the `report` command.
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Path to the team file (.yaml, .yml, or .json).
    pub team_file: PathBuf,

    /// Path to the outcome file recorded by the executor.
    #[arg(long)]
    pub outcomes: PathBuf,

    /// Emit the result tree as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
