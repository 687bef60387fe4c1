//! Implementation of the `crewplan show` command.

use crate::cli::ShowArgs;
use crate::error::Result;
use crate::team::Team;

/// Execute the `crewplan show` command.
///
/// Displays the team summary: process, manager, version, agents with their
/// task counts, and each task with its dependencies and checks.
pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let team = Team::load(&args.team_file)?;

    println!("Team: {}", team.name);
    println!("=====");
    if !team.description.is_empty() {
        println!("Description: {}", team.description);
    }
    println!("Process:     {}", team.process);
    if !team.manager.is_empty() {
        println!("Manager:     {}", team.manager);
    }
    if !team.version.is_empty() {
        println!("Version:     {}", team.version);
    }
    println!();

    if !team.agents.is_empty() {
        println!("Agents:");
        for agent in &team.agents {
            println!("  {:<16} {} task(s)", agent, team.agent_tasks(agent).len());
        }
        println!();
    }

    println!("Tasks ({}):", team.tasks.len());
    for task in &team.tasks {
        println!("  {}", task.name);
        if !task.agent.is_empty() {
            println!("    Agent:      {}", task.agent);
        }
        if !task.depends_on.is_empty() {
            println!("    Depends on: {}", task.depends_on.join(", "));
        }
        if !task.subtasks.is_empty() {
            println!("    Checks:");
            for subtask in &task.subtasks {
                let required = if subtask.required { "required" } else { "optional" };
                println!("      - {} ({}, {})", subtask.name, subtask.kind(), required);
            }
        }
    }

    Ok(())
}
