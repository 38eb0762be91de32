use crate::config::Config;
use crate::display;
use crate::error::{Result, SquadError};
use crate::installer::{self, InstallOptions};
use crate::registry::{Agent, Registry};
use indicatif::ProgressBar;
use owo_colors::OwoColorize;
use std::path::Path;
use std::time::Duration;

pub fn execute(
    registry: &Registry,
    config: &Config,
    agents: &[String],
    dest: Option<&Path>,
    all: bool,
) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let dest_dir = config.dest_dir(&cwd, dest);
    let catalog = registry.catalog();

    let to_update: Vec<Agent> = if all {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message("Detecting installed agents...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        let installed_ids = installer::list_installed(&dest_dir);
        spinner.finish_and_clear();

        if installed_ids.is_empty() {
            display::error("No agents installed");
            display::info(&format!("Looking in: {}", dest_dir.display()));
            println!(
                "\n{} {} {}",
                "Use".dimmed(),
                "squad install <agent-id>".cyan(),
                "to install agents".dimmed()
            );
            return Ok(());
        }

        display::success(&format!("Found {} installed agent(s)", installed_ids.len()));

        // Installed files with no catalog entry (README.md included) are
        // skipped with a warning.
        let known: Vec<Agent> = installed_ids
            .iter()
            .filter_map(|id| catalog.agent(id))
            .cloned()
            .collect();
        if known.len() < installed_ids.len() {
            display::warning("Some installed agents not found in registry");
        }
        known
    } else if agents.is_empty() {
        return Err(SquadError::InvalidArguments(
            "Please specify agents to update or use --all".to_string(),
        ));
    } else {
        let mut resolved = Vec::with_capacity(agents.len());
        for agent_id in agents {
            let Some(agent) = catalog.agent(agent_id) else {
                eprintln!(
                    "{} {} {}",
                    "Use".dimmed(),
                    "squad list".cyan(),
                    "to see available agents".dimmed()
                );
                return Err(SquadError::AgentNotFound(agent_id.clone()));
            };
            resolved.push(agent.clone());
        }
        resolved
    };

    println!(
        "\n{}\n",
        format!("Updating {} agent(s)...", to_update.len()).cyan()
    );

    // Updates always overwrite.
    let outcome = installer::install_many(
        registry,
        &to_update,
        &dest_dir,
        &InstallOptions { force: true },
    );

    display::install_results(&outcome);

    if !outcome.installed.is_empty() {
        println!();
        display::info(&format!("Updated agents in: {}", dest_dir.display()));
        println!();
    }

    if !outcome.failed.is_empty() {
        return Err(SquadError::PartialFailure(outcome.failed.len()));
    }
    Ok(())
}
