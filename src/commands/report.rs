//! Implementation of the `crewplan report` command.

use crate::cli::ReportArgs;
use crate::error::{CrewError, Result};
use crate::graph;
use crate::outcomes::{OutcomeSet, build_team_result};
use crate::report::render_team_result;
use crate::status::Status;
use crate::team::Team;

/// Execute the `crewplan report` command.
///
/// Validates the team, folds the recorded outcomes into a result tree, and
/// renders it. A NO-GO team fails the command with its own exit code so CI
/// callers can gate on it; the report is still printed first.
pub fn cmd_report(args: ReportArgs) -> Result<()> {
    let team = Team::load(&args.team_file)?;
    graph::validate(&team)?;

    let outcomes = OutcomeSet::load(&args.outcomes)?;
    let result = build_team_result(&team, &outcomes)?;

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| CrewError::UserError(format!("failed to serialize report: {}", e)))?;
        println!("{}", json);
    } else {
        print!("{}", render_team_result(&result));
    }

    if result.status == Status::NoGo {
        let failed: Vec<&str> = result
            .tasks
            .iter()
            .filter(|t| t.status == Status::NoGo)
            .map(|t| t.name.as_str())
            .collect();
        return Err(CrewError::Gate(format!(
            "{} task(s) failed: {}",
            failed.len(),
            failed.join(", ")
        )));
    }

    Ok(())
}
