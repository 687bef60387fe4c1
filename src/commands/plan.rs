//! Implementation of the `crewplan plan` command.

use crate::cli::PlanArgs;
use crate::error::{CrewError, Result};
use crate::graph;
use crate::report::{render_serial_plan, render_wave_plan};
use crate::team::Team;

/// Execute the `crewplan plan` command.
///
/// Validates the team, then prints either the serial topological order or,
/// with `--waves`, the maximal-concurrency wave partition.
pub fn cmd_plan(args: PlanArgs) -> Result<()> {
    let team = Team::load(&args.team_file)?;
    graph::validate(&team)?;

    if args.waves {
        let waves = graph::parallel_groups(&team)?;
        if args.json {
            println!("{}", to_json(&waves)?);
        } else {
            print!("{}", render_wave_plan(&team, &waves));
        }
    } else {
        let order = graph::topological_sort(&team)?;
        if args.json {
            println!("{}", to_json(&order)?);
        } else {
            print!("{}", render_serial_plan(&team, &order));
        }
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CrewError::UserError(format!("failed to serialize plan: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{CYCLIC_TEAM_YAML, VALID_TEAM_YAML, write_team};
    use crate::exit_codes;

    fn plan_args(path: std::path::PathBuf, waves: bool, json: bool) -> PlanArgs {
        PlanArgs {
            team_file: path,
            waves,
            json,
        }
    }

    #[test]
    fn serial_plan_succeeds() {
        let (_dir, path) = write_team(VALID_TEAM_YAML);
        assert!(cmd_plan(plan_args(path, false, false)).is_ok());
    }

    #[test]
    fn wave_plan_succeeds() {
        let (_dir, path) = write_team(VALID_TEAM_YAML);
        assert!(cmd_plan(plan_args(path, true, false)).is_ok());
    }

    #[test]
    fn json_output_succeeds() {
        let (_dir, path) = write_team(VALID_TEAM_YAML);
        assert!(cmd_plan(plan_args(path.clone(), false, true)).is_ok());
        assert!(cmd_plan(plan_args(path, true, true)).is_ok());
    }

    #[test]
    fn cyclic_team_fails_for_both_plan_shapes() {
        let (_dir, path) = write_team(CYCLIC_TEAM_YAML);

        let serial = cmd_plan(plan_args(path.clone(), false, false)).unwrap_err();
        assert_eq!(serial.exit_code(), exit_codes::CYCLE_FAILURE);

        let waves = cmd_plan(plan_args(path, true, false)).unwrap_err();
        assert_eq!(waves.exit_code(), exit_codes::CYCLE_FAILURE);
    }
}
