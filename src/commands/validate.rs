//! Implementation of the `crewplan validate` command.

use crate::cli::ValidateArgs;
use crate::error::Result;
use crate::graph;
use crate::team::Team;

/// Execute the `crewplan validate` command.
///
/// Runs structural validation, then the topological sort as the
/// authoritative acyclicity check. The sorted order itself is discarded;
/// only its success or cycle error matters here.
pub fn cmd_validate(args: ValidateArgs) -> Result<()> {
    let team = Team::load(&args.team_file)?;

    graph::validate(&team)?;
    let order = graph::topological_sort(&team)?;

    println!(
        "Team '{}' is valid: {} task(s), {} process, no cycles.",
        team.name,
        order.len(),
        team.process
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ValidateArgs;
    use crate::commands::test_support::{CYCLIC_TEAM_YAML, VALID_TEAM_YAML, write_team};
    use crate::exit_codes;

    #[test]
    fn valid_team_passes() {
        let (_dir, path) = write_team(VALID_TEAM_YAML);
        let result = cmd_validate(ValidateArgs { team_file: path });
        assert!(result.is_ok());
    }

    #[test]
    fn cyclic_team_fails_with_cycle_exit_code() {
        let (_dir, path) = write_team(CYCLIC_TEAM_YAML);
        let err = cmd_validate(ValidateArgs { team_file: path }).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::CYCLE_FAILURE);
        assert!(err.to_string().contains("circular dependency"));
    }

    #[test]
    fn unknown_dependency_fails_with_validation_exit_code() {
        let yaml = "name: demo\ntasks:\n  - name: P\n    depends_on: [Q]\n";
        let (_dir, path) = write_team(yaml);
        let err = cmd_validate(ValidateArgs { team_file: path }).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
        assert!(err.to_string().contains("'Q'"));
    }

    #[test]
    fn missing_file_is_user_error() {
        let err = cmd_validate(ValidateArgs {
            team_file: "/nonexistent/team.yaml".into(),
        })
        .unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }
}
