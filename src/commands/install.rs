use crate::config::Config;
use crate::display;
use crate::error::{Result, SquadError};
use crate::installer::{self, InstallOptions};
use crate::registry::{Agent, Registry};
use crate::scaffold;
use indicatif::ProgressBar;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub fn execute(
    registry: &Registry,
    config: &Config,
    agents: &[String],
    dest: Option<&Path>,
    force: bool,
    all_category: Option<&str>,
) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let dest_dir = config.dest_dir(&cwd, dest);

    let to_install = resolve_agents(registry, agents, all_category)?;

    // The destination is conventionally <project>/.claude/agents; scaffold
    // the project two levels up.
    let project_dir = project_dir_for(&dest_dir, &cwd);

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Initializing project structure...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let scaffold_result = scaffold::initialize_project(&project_dir);
    spinner.finish_and_clear();
    match scaffold_result {
        Ok(_) => display::success("Project structure initialized"),
        Err(e) => {
            display::error("Failed to initialize project structure");
            return Err(e);
        }
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Installing {} agent(s)...", to_install.len()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let options = InstallOptions {
        force: force || config.install.force,
    };
    let outcome = installer::install_many(registry, &to_install, &dest_dir, &options);

    spinner.finish_and_clear();
    display::install_results(&outcome);

    if !outcome.installed.is_empty() {
        println!();
        display::success(&format!("Agents installed to: {}", dest_dir.display()));
        println!();
        println!("{}", "Next steps:".bold());
        println!("{}", "  1. Open your project in Claude Code".dimmed());
        println!(
            "  {} {}",
            "2. Use agents like:".dimmed(),
            format!("\"Use the agent {} to <task>\"", outcome.installed[0].id).cyan()
        );
        println!();
    }

    if !outcome.failed.is_empty() {
        return Err(SquadError::PartialFailure(outcome.failed.len()));
    }
    Ok(())
}

/// Resolve the batch: a whole category, or explicit ids. Unknown ids abort
/// before anything is installed.
fn resolve_agents(
    registry: &Registry,
    agents: &[String],
    all_category: Option<&str>,
) -> Result<Vec<Agent>> {
    let catalog = registry.catalog();

    if let Some(category_id) = all_category {
        let Some(category) = catalog.category(category_id) else {
            eprintln!(
                "{} {} {}",
                "Use".dimmed(),
                "squad list".cyan(),
                "to see available categories".dimmed()
            );
            return Err(SquadError::CategoryNotFound(category_id.to_string()));
        };

        let members: Vec<Agent> = catalog
            .agents_in_category(category_id)
            .into_iter()
            .cloned()
            .collect();
        if members.is_empty() {
            return Err(SquadError::InvalidArguments(format!(
                "No agents found in category: {}",
                category_id
            )));
        }

        println!(
            "{}\n",
            format!(
                "Installing all {} agents from category: {}",
                members.len(),
                category.name
            )
            .cyan()
        );
        return Ok(members);
    }

    if agents.is_empty() {
        return Err(SquadError::InvalidArguments(
            "Please specify at least one agent to install. \
             Use 'squad list' to see available agents."
                .to_string(),
        ));
    }

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
    Ok(resolved)
}

fn project_dir_for(dest_dir: &Path, cwd: &Path) -> PathBuf {
    dest_dir
        .parent()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| cwd.to_path_buf())
}
