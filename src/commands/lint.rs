//! Implementation of the `crewplan lint` command.

use crate::cli::LintArgs;
use crate::error::{CrewError, Result};
use crate::graph::ValidationError;
use crate::lint::lint_team;
use crate::report::render_lint_report;
use crate::team::Team;

/// Execute the `crewplan lint` command.
///
/// Prints all advisory declaration issues. Warnings do not affect the exit
/// code; any error-severity issue fails the command.
pub fn cmd_lint(args: LintArgs) -> Result<()> {
    let team = Team::load(&args.team_file)?;
    let report = lint_team(&team);

    print!("{}", render_lint_report(&team, &report));

    if report.has_errors() {
        return Err(CrewError::Validation(ValidationError::new(
            "tasks",
            format!("{} lint error(s) found", report.error_count()),
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{VALID_TEAM_YAML, write_team};
    use crate::exit_codes;

    #[test]
    fn clean_team_lints_ok() {
        let (_dir, path) = write_team(VALID_TEAM_YAML);
        assert!(cmd_lint(LintArgs { team_file: path }).is_ok());
    }

    #[test]
    fn warnings_do_not_fail_the_command() {
        // Unclassified subtask: a warning, not an error.
        let yaml = "name: demo\ntasks:\n  - name: t\n    subtasks:\n      - name: empty\n";
        let (_dir, path) = write_team(yaml);
        assert!(cmd_lint(LintArgs { team_file: path }).is_ok());
    }

    #[test]
    fn lint_errors_fail_with_validation_exit_code() {
        let yaml = concat!(
            "name: demo\n",
            "tasks:\n",
            "  - name: t\n",
            "    subtasks:\n",
            "      - name: grep\n",
            "        pattern: \"(unclosed\"\n",
            "        files: \"src/**\"\n",
        );
        let (_dir, path) = write_team(yaml);
        let err = cmd_lint(LintArgs { team_file: path }).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
        assert!(err.to_string().contains("lint error"));
    }
}
