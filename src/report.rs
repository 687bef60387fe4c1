//! Human-readable rendering of plans, lint reports, and aggregated results.
//!
//! All render functions return a string; command handlers print it. Machine
//! consumers use the `--json` flags instead, which serialize the underlying
//! values directly.

use crate::lint::LintReport;
use crate::status::{Status, TeamResult};
use crate::team::{Task, Team};
use chrono::Utc;

/// Render the serial execution plan: the topological order, numbered.
pub fn render_serial_plan(team: &Team, order: &[&Task]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Execution plan for team '{}' ({} process, {} task(s))\n\n",
        team.name,
        team.process,
        order.len()
    ));

    for (i, task) in order.iter().enumerate() {
        let deps = if task.depends_on.is_empty() {
            String::new()
        } else {
            format!("  (after: {})", task.depends_on.join(", "))
        };
        out.push_str(&format!(
            "  {:>2}. {:<20} agent: {}{}\n",
            i + 1,
            task.name,
            if task.agent.is_empty() { "-" } else { &task.agent },
            deps
        ));
    }

    out
}

/// Render the wave plan: one line block per wave, tasks listed in team order.
pub fn render_wave_plan(team: &Team, waves: &[Vec<&Task>]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Wave plan for team '{}' ({} wave(s))\n",
        team.name,
        waves.len()
    ));

    for (i, wave) in waves.iter().enumerate() {
        out.push_str(&format!("\n  Wave {} ({} task(s)):\n", i + 1, wave.len()));
        for task in wave {
            out.push_str(&format!(
                "    - {:<20} agent: {}\n",
                task.name,
                if task.agent.is_empty() { "-" } else { &task.agent }
            ));
        }
    }

    out.push_str("\nTasks within a wave have no dependency relationship and may run concurrently.\n");
    out
}

/// Render an aggregated team result tree with one status marker per line.
pub fn render_team_result(result: &TeamResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("Team Report: {}\n", result.name));
    out.push_str("=============\n");
    if !result.version.is_empty() {
        out.push_str(&format!("Version:   {}\n", result.version));
    }
    out.push_str(&format!(
        "Generated: {}\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!("Status:    {}\n\n", result.status));

    for task in &result.tasks {
        out.push_str(&format!("  [{:^7}] {}", task.status.to_string(), task.name));
        if !task.agent.is_empty() {
            out.push_str(&format!("  (agent: {})", task.agent));
        }
        out.push('\n');

        for subtask in &task.subtasks {
            out.push_str(&format!(
                "      [{:^7}] {}",
                subtask.status.to_string(),
                subtask.name
            ));
            if !subtask.message.is_empty() {
                out.push_str(&format!("  - {}", subtask.message));
            }
            out.push('\n');
        }
    }

    let summary = summarize_statuses(result);
    out.push('\n');
    out.push_str(&summary);
    out
}

fn summarize_statuses(result: &TeamResult) -> String {
    let count = |status: Status| {
        result
            .tasks
            .iter()
            .filter(|t| t.status == status)
            .count()
    };

    format!(
        "Tasks: {} GO, {} NO-GO, {} WARN, {} SKIP (of {})\n",
        count(Status::Go),
        count(Status::NoGo),
        count(Status::Warn),
        count(Status::Skip),
        result.tasks.len()
    )
}

/// Render a lint report doctor-style: issues grouped under their severity
/// marker, with remediation hints indented beneath.
pub fn render_lint_report(team: &Team, report: &LintReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Lint report for team '{}'\n\n", team.name));

    if !report.has_issues() {
        out.push_str("No issues found.\n");
        return out;
    }

    for issue in &report.issues {
        match &issue.location {
            Some(loc) => out.push_str(&format!(
                "  {}: [{}] {}: {}\n",
                issue.severity, issue.category, loc, issue.description
            )),
            None => out.push_str(&format!(
                "  {}: [{}] {}\n",
                issue.severity, issue.category, issue.description
            )),
        }
        if let Some(remediation) = &issue.remediation {
            out.push_str(&format!("      Fix: {}\n", remediation));
        }
    }

    out.push_str(&format!(
        "\n{} error(s), {} warning(s)\n",
        report.error_count(),
        report.warning_count()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{parallel_groups, topological_sort};
    use crate::lint::lint_team;
    use crate::status::{SubtaskResult, TaskResult};
    use crate::team::Subtask;

    fn check(name: &str, command: &str) -> Subtask {
        let mut sub = Subtask::new(name);
        sub.command = command.to_string();
        sub
    }

    fn sample_team() -> Team {
        Team::new("release")
            .add_agent("dev")
            .add_agent("qa")
            .add_task(Task::new("build", "dev").add_subtask(check("compile", "cargo build")))
            .add_task(
                Task::new("test", "qa")
                    .add_dependency("build")
                    .add_subtask(check("unit", "cargo test")),
            )
    }

    #[test]
    fn serial_plan_lists_tasks_in_order() {
        let team = sample_team();
        let order = topological_sort(&team).unwrap();
        let rendered = render_serial_plan(&team, &order);

        assert!(rendered.contains("Execution plan for team 'release'"));
        let build_pos = rendered.find("1. build").unwrap();
        let test_pos = rendered.find("2. test").unwrap();
        assert!(build_pos < test_pos);
        assert!(rendered.contains("(after: build)"));
    }

    #[test]
    fn wave_plan_groups_by_wave() {
        let team = sample_team();
        let waves = parallel_groups(&team).unwrap();
        let rendered = render_wave_plan(&team, &waves);

        assert!(rendered.contains("2 wave(s)"));
        assert!(rendered.contains("Wave 1 (1 task(s))"));
        assert!(rendered.contains("Wave 2 (1 task(s))"));
    }

    #[test]
    fn team_result_rendering_shows_statuses() {
        let team = sample_team();
        let build = TaskResult::from_subtasks(
            team.get_task("build").unwrap(),
            vec![SubtaskResult::go("compile")],
        );
        let test = TaskResult::from_subtasks(
            team.get_task("test").unwrap(),
            vec![SubtaskResult::new("unit", Status::NoGo, "3 tests failed")],
        );
        let result = TeamResult::from_tasks(&team, vec![build, test]);

        let rendered = render_team_result(&result);
        assert!(rendered.contains("Status:    NO-GO"));
        assert!(rendered.contains("3 tests failed"));
        assert!(rendered.contains("1 GO, 1 NO-GO, 0 WARN, 0 SKIP (of 2)"));
    }

    #[test]
    fn lint_rendering_handles_clean_and_dirty_teams() {
        let team = sample_team();
        let rendered = render_lint_report(&team, &lint_team(&team));
        assert!(rendered.contains("No issues found."));

        let dirty = Team::new("demo").add_task(Task::new("t", "dev").add_subtask(Subtask::new("x")));
        let rendered = render_lint_report(&dirty, &lint_team(&dirty));
        assert!(rendered.contains("WARNING"));
        assert!(rendered.contains("unclassified_check"));
    }
}
