//! Advisory definition checks over a team.
//!
//! Lint inspects how a team's checks are declared without executing anything:
//! it compiles patterns and globs, word-splits commands, and flags naming and
//! agent-list inconsistencies. None of this affects graph or status engine
//! correctness; it exists to catch declaration mistakes before a run.
//!
//! Reports:
//! - Duplicate task names and duplicate subtask names within a task
//! - Subtasks with more than one of command/pattern/file set
//! - Unclassified subtasks (no check field set)
//! - Patterns that fail to compile as regex
//! - `files` globs that fail to compile
//! - Pattern checks with no `files` glob to scope them
//! - Commands that fail shell-style word splitting or are empty
//! - `expected_output` on a non-command check
//! - Task names outside the conventional identifier shape
//! - Assigned agents (or the hierarchical manager) absent from the agent list

use crate::team::{CheckKind, Subtask, Team};
use globset::Glob;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Conventional shape for task and subtask names.
static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]*$").expect("Invalid name regex"));

/// Severity level for lint issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    /// Warning: suspicious declaration, but the team is usable.
    Warning,
    /// Error: the declaration is broken and should be fixed.
    Error,
}

impl std::fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueSeverity::Warning => write!(f, "WARNING"),
            IssueSeverity::Error => write!(f, "ERROR"),
        }
    }
}

/// A detected declaration issue.
#[derive(Debug, Clone)]
pub struct Issue {
    /// Severity level.
    pub severity: IssueSeverity,
    /// Category of the issue (stable machine-readable code).
    pub category: String,
    /// Description of the issue.
    pub description: String,
    /// Task (and optionally subtask) the issue concerns, as "task" or
    /// "task/subtask".
    pub location: Option<String>,
    /// Recommended fix.
    pub remediation: Option<String>,
}

impl Issue {
    pub fn new(severity: IssueSeverity, category: &str, description: &str) -> Self {
        Self {
            severity,
            category: category.to_string(),
            description: description.to_string(),
            location: None,
            remediation: None,
        }
    }

    pub fn at(mut self, location: String) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_remediation(mut self, remediation: &str) -> Self {
        self.remediation = Some(remediation.to_string());
        self
    }
}

/// Result of linting a team.
#[derive(Debug, Default)]
pub struct LintReport {
    /// List of detected issues.
    pub issues: Vec<Issue>,
}

impl LintReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.severity == IssueSeverity::Error)
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Warning)
            .count()
    }
}

/// Run all lint checks over a team.
pub fn lint_team(team: &Team) -> LintReport {
    let mut report = LintReport::new();

    check_duplicate_task_names(team, &mut report);
    check_agent_list(team, &mut report);

    for task in &team.tasks {
        check_task_name_shape(&task.name, &mut report);
        check_duplicate_subtask_names(&task.name, &task.subtasks, &mut report);

        for subtask in &task.subtasks {
            check_subtask(&task.name, subtask, &mut report);
        }
    }

    report
}

fn check_duplicate_task_names(team: &Team, report: &mut LintReport) {
    let mut seen: HashSet<&str> = HashSet::new();
    for task in &team.tasks {
        if !seen.insert(task.name.as_str()) {
            report.issues.push(
                Issue::new(
                    IssueSeverity::Error,
                    "duplicate_task",
                    &format!("task name '{}' is declared more than once", task.name),
                )
                .at(task.name.clone())
                .with_remediation("Rename one of the tasks; task names are identities"),
            );
        }
    }
}

fn check_duplicate_subtask_names(task_name: &str, subtasks: &[Subtask], report: &mut LintReport) {
    let mut seen: HashSet<&str> = HashSet::new();
    for subtask in subtasks {
        if !seen.insert(subtask.name.as_str()) {
            report.issues.push(
                Issue::new(
                    IssueSeverity::Error,
                    "duplicate_subtask",
                    &format!(
                        "subtask name '{}' is declared more than once in task '{}'",
                        subtask.name, task_name
                    ),
                )
                .at(format!("{}/{}", task_name, subtask.name))
                .with_remediation("Rename one of the subtasks"),
            );
        }
    }
}

fn check_task_name_shape(name: &str, report: &mut LintReport) {
    if !NAME_REGEX.is_match(name) {
        report.issues.push(
            Issue::new(
                IssueSeverity::Warning,
                "name_shape",
                &format!(
                    "task name '{}' is outside the conventional shape (letters, digits, '_', '.', '-')",
                    name
                ),
            )
            .at(name.to_string()),
        );
    }
}

fn check_agent_list(team: &Team, report: &mut LintReport) {
    let agents: HashSet<&str> = team.agents.iter().map(|a| a.as_str()).collect();

    if !team.manager.is_empty() && !agents.contains(team.manager.as_str()) {
        report.issues.push(
            Issue::new(
                IssueSeverity::Warning,
                "unknown_manager",
                &format!("manager '{}' is not in the team agent list", team.manager),
            )
            .with_remediation("Add the manager to `agents` or fix the name"),
        );
    }

    // Agent assignment is deliberately unenforced by validation; flag
    // mismatches here as advisory only.
    for task in &team.tasks {
        if !task.agent.is_empty() && !agents.contains(task.agent.as_str()) {
            report.issues.push(
                Issue::new(
                    IssueSeverity::Warning,
                    "unknown_agent",
                    &format!(
                        "task '{}' is assigned to agent '{}' which is not in the team agent list",
                        task.name, task.agent
                    ),
                )
                .at(task.name.clone())
                .with_remediation("Add the agent to `agents` or fix the assignment"),
            );
        }
    }
}

fn check_subtask(task_name: &str, subtask: &Subtask, report: &mut LintReport) {
    let location = format!("{}/{}", task_name, subtask.name);

    let set_fields = [
        (!subtask.command.is_empty(), "command"),
        (!subtask.pattern.is_empty(), "pattern"),
        (!subtask.file.is_empty(), "file"),
    ];
    let set_count = set_fields.iter().filter(|(set, _)| *set).count();

    if set_count > 1 {
        let names: Vec<&str> = set_fields
            .iter()
            .filter(|(set, _)| *set)
            .map(|(_, n)| *n)
            .collect();
        report.issues.push(
            Issue::new(
                IssueSeverity::Warning,
                "ambiguous_check",
                &format!(
                    "subtask sets {} together; the check kind resolves to '{}'",
                    names.join(" and "),
                    subtask.kind()
                ),
            )
            .at(location.clone())
            .with_remediation("Set exactly one of command, pattern, or file"),
        );
    }

    match subtask.kind() {
        CheckKind::Command => check_command(subtask, &location, report),
        CheckKind::Pattern => check_pattern(subtask, &location, report),
        CheckKind::File => {}
        CheckKind::Unclassified => {
            report.issues.push(
                Issue::new(
                    IssueSeverity::Warning,
                    "unclassified_check",
                    "subtask sets none of command, pattern, or file; it can never be evaluated",
                )
                .at(location.clone()),
            );
        }
    }

    if !subtask.expected_output.is_empty() && subtask.kind() != CheckKind::Command {
        report.issues.push(
            Issue::new(
                IssueSeverity::Warning,
                "unused_expected_output",
                "expected_output is only meaningful for command checks",
            )
            .at(location),
        );
    }
}

fn check_command(subtask: &Subtask, location: &str, report: &mut LintReport) {
    match shell_words::split(subtask.command.trim()) {
        Ok(args) if args.is_empty() => {
            report.issues.push(
                Issue::new(
                    IssueSeverity::Error,
                    "empty_command",
                    "command is empty after shell-style word splitting",
                )
                .at(location.to_string()),
            );
        }
        Ok(_) => {}
        Err(e) => {
            report.issues.push(
                Issue::new(
                    IssueSeverity::Error,
                    "unparsable_command",
                    &format!("command cannot be word-split: {}", e),
                )
                .at(location.to_string())
                .with_remediation("Check for unmatched quotes or invalid escape sequences"),
            );
        }
    }
}

fn check_pattern(subtask: &Subtask, location: &str, report: &mut LintReport) {
    if let Err(e) = Regex::new(&subtask.pattern) {
        report.issues.push(
            Issue::new(
                IssueSeverity::Error,
                "invalid_pattern",
                &format!("pattern does not compile as a regex: {}", e),
            )
            .at(location.to_string()),
        );
    }

    if subtask.files.is_empty() {
        report.issues.push(
            Issue::new(
                IssueSeverity::Warning,
                "unscoped_pattern",
                "pattern check has no `files` glob; the executor has nothing to search",
            )
            .at(location.to_string())
            .with_remediation("Add a `files` glob such as \"src/**/*.rs\""),
        );
    } else if let Err(e) = Glob::new(&subtask.files) {
        report.issues.push(
            Issue::new(
                IssueSeverity::Error,
                "invalid_files_glob",
                &format!("`files` glob does not compile: {}", e),
            )
            .at(location.to_string()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::Task;

    fn sub(name: &str) -> Subtask {
        Subtask::new(name)
    }

    #[test]
    fn clean_team_has_no_issues() {
        let mut check = sub("compile");
        check.command = "cargo build --release".to_string();
        let team = Team::new("demo")
            .add_agent("dev")
            .add_task(Task::new("build", "dev").add_subtask(check));

        let report = lint_team(&team);
        assert!(!report.has_issues(), "issues: {:?}", report.issues);
    }

    #[test]
    fn duplicate_task_names_are_errors() {
        let team = Team::new("demo")
            .add_task(Task::new("build", "dev"))
            .add_task(Task::new("build", "qa"));

        let report = lint_team(&team);
        assert!(report.has_errors());
        assert!(report.issues.iter().any(|i| i.category == "duplicate_task"));
    }

    #[test]
    fn duplicate_subtask_names_are_errors() {
        let team = Team::new("demo").add_task(
            Task::new("build", "dev")
                .add_subtask(sub("check"))
                .add_subtask(sub("check")),
        );

        let report = lint_team(&team);
        assert!(
            report
                .issues
                .iter()
                .any(|i| i.category == "duplicate_subtask")
        );
    }

    #[test]
    fn ambiguous_check_fields_warn() {
        let mut s = sub("check");
        s.command = "true".to_string();
        s.pattern = "TODO".to_string();
        let team = Team::new("demo").add_task(Task::new("t", "dev").add_subtask(s));

        let report = lint_team(&team);
        let issue = report
            .issues
            .iter()
            .find(|i| i.category == "ambiguous_check")
            .unwrap();
        assert_eq!(issue.severity, IssueSeverity::Warning);
        assert!(issue.description.contains("'command'"));
    }

    #[test]
    fn unclassified_subtask_warns() {
        let team = Team::new("demo").add_task(Task::new("t", "dev").add_subtask(sub("empty")));
        let report = lint_team(&team);
        assert!(
            report
                .issues
                .iter()
                .any(|i| i.category == "unclassified_check")
        );
        assert!(!report.has_errors());
    }

    #[test]
    fn broken_regex_is_error() {
        let mut s = sub("grep");
        s.pattern = "(unclosed".to_string();
        s.files = "src/**/*.rs".to_string();
        let team = Team::new("demo").add_task(Task::new("t", "dev").add_subtask(s));

        let report = lint_team(&team);
        assert!(report.has_errors());
        assert!(report.issues.iter().any(|i| i.category == "invalid_pattern"));
    }

    #[test]
    fn pattern_without_files_glob_warns() {
        let mut s = sub("grep");
        s.pattern = "TODO".to_string();
        let team = Team::new("demo").add_task(Task::new("t", "dev").add_subtask(s));

        let report = lint_team(&team);
        assert!(
            report
                .issues
                .iter()
                .any(|i| i.category == "unscoped_pattern")
        );
    }

    #[test]
    fn broken_glob_is_error() {
        let mut s = sub("grep");
        s.pattern = "TODO".to_string();
        s.files = "src/**/*.{rs".to_string();
        let team = Team::new("demo").add_task(Task::new("t", "dev").add_subtask(s));

        let report = lint_team(&team);
        assert!(
            report
                .issues
                .iter()
                .any(|i| i.category == "invalid_files_glob")
        );
    }

    #[test]
    fn unparsable_command_is_error() {
        let mut s = sub("run");
        s.command = "echo \"unterminated".to_string();
        let team = Team::new("demo").add_task(Task::new("t", "dev").add_subtask(s));

        let report = lint_team(&team);
        assert!(
            report
                .issues
                .iter()
                .any(|i| i.category == "unparsable_command")
        );
    }

    #[test]
    fn unknown_agent_and_manager_warn() {
        let mut team = Team::new("demo")
            .add_agent("dev")
            .add_task(Task::new("t", "ghost"));
        team.manager = "phantom".to_string();

        let report = lint_team(&team);
        assert!(report.issues.iter().any(|i| i.category == "unknown_agent"));
        assert!(report.issues.iter().any(|i| i.category == "unknown_manager"));
        assert!(!report.has_errors());
    }

    #[test]
    fn expected_output_on_file_check_warns() {
        let mut s = sub("exists");
        s.file = "README.md".to_string();
        s.expected_output = "ok".to_string();
        let team = Team::new("demo").add_task(Task::new("t", "dev").add_subtask(s));

        let report = lint_team(&team);
        assert!(
            report
                .issues
                .iter()
                .any(|i| i.category == "unused_expected_output")
        );
    }

    #[test]
    fn odd_task_name_warns() {
        let team = Team::new("demo").add_task(Task::new("my task!", "dev"));
        let report = lint_team(&team);
        assert!(report.issues.iter().any(|i| i.category == "name_shape"));
    }

    #[test]
    fn report_counts() {
        let mut bad_cmd = sub("run");
        bad_cmd.command = "\"".to_string();
        let team = Team::new("demo")
            .add_agent("dev")
            .add_task(Task::new("t", "dev").add_subtask(bad_cmd).add_subtask(sub("empty")));

        let report = lint_team(&team);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
    }
}
