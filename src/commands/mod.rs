//! Command implementations for crewplan.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, one module per command.

mod lint;
mod plan;
mod report;
mod show;
mod validate;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Validate(args) => validate::cmd_validate(args),
        Command::Plan(args) => plan::cmd_plan(args),
        Command::Show(args) => show::cmd_show(args),
        Command::Lint(args) => lint::cmd_lint(args),
        Command::Report(args) => report::cmd_report(args),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;
    use tempfile::TempDir;

    pub const VALID_TEAM_YAML: &str = r#"
name: release-qa
process: parallel
version: "1.0"
agents: [builder, tester]
tasks:
  - name: build
    agent: builder
    subtasks:
      - name: compile
        command: cargo build
  - name: test
    agent: tester
    depends_on: [build]
    subtasks:
      - name: unit
        command: cargo test
      - name: lint
        command: cargo clippy
        required: false
"#;

    pub const CYCLIC_TEAM_YAML: &str = r#"
name: tangled
tasks:
  - name: x
    depends_on: [z]
  - name: y
    depends_on: [x]
  - name: z
    depends_on: [y]
"#;

    /// Write a team fixture to a temp dir and return (dir, path).
    /// The dir must stay alive for the path to remain valid.
    pub fn write_team(yaml: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("team.yaml");
        std::fs::write(&path, yaml).unwrap();
        (dir, path)
    }
}
