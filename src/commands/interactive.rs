//! Guided agent selection and installation.

use crate::display;
use crate::error::{Result, SquadError};
use crate::installer::{self, InstallOptions};
use crate::registry::{Agent, Registry};
use crate::scaffold;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use owo_colors::OwoColorize;
use std::path::PathBuf;

/// Agents preselected by the quick-install flow.
const QUICK_PICKS: &[&str] = &[
    "product-manager",
    "tech-architect",
    "react-specialist",
    "api-developer",
    "unit-tester",
    "ci-cd-engineer",
];

enum Action {
    Install,
    Browse,
    Quick,
    Category,
    Exit,
}

pub fn execute(registry: &Registry) -> Result<()> {
    println!("\n{}\n", "Squad - Interactive Mode".cyan().bold());
    println!(
        "{}\n",
        "This wizard will help you select and install agents for your project.".dimmed()
    );

    loop {
        let project_dir = choose_project_dir()?;
        let dest_dir = project_dir.join(".claude").join("agents");

        let installed = installer::list_installed(&dest_dir);
        if !installed.is_empty() {
            println!(
                "\n{}\n",
                format!("✓ Found {} installed agent(s)", installed.len()).green()
            );
        }

        let action = choose_action()?;
        let selected = match action {
            Action::Exit => {
                println!("{}", "\nGoodbye!\n".dimmed());
                return Ok(());
            }
            Action::Install => select_from_all(registry)?,
            Action::Browse => select_from_category(registry)?,
            Action::Quick => select_quick_picks(registry)?,
            Action::Category => select_whole_category(registry)?,
        };

        if selected.is_empty() {
            println!("{}", "\nNo agents selected.\n".yellow());
            continue;
        }

        println!(
            "\n{}\n",
            format!("Installing {} agent(s)...", selected.len()).cyan()
        );

        scaffold::initialize_project(&project_dir)?;
        let outcome = installer::install_many(
            registry,
            &selected,
            &dest_dir,
            &InstallOptions { force: true },
        );
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

        let again = Confirm::new()
            .with_prompt("Install more agents?")
            .default(false)
            .interact()
            .map_err(prompt_err)?;
        if !again {
            println!("{}", "\nHappy coding!\n".dimmed());
            return Ok(());
        }
    }
}

fn choose_project_dir() -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;

    let use_current = Confirm::new()
        .with_prompt("Install agents in current directory?")
        .default(true)
        .interact()
        .map_err(prompt_err)?;
    if use_current {
        return Ok(cwd);
    }

    let custom: String = Input::new()
        .with_prompt("Enter project directory")
        .default(cwd.display().to_string())
        .interact_text()
        .map_err(prompt_err)?;
    Ok(PathBuf::from(custom))
}

fn choose_action() -> Result<Action> {
    let choice = Select::new()
        .with_prompt("What would you like to do?")
        .items(&[
            "Install new agents",
            "Browse agents by category",
            "Quick install (popular agents)",
            "Install complete category",
            "Exit",
        ])
        .default(0)
        .interact()
        .map_err(prompt_err)?;

    Ok(match choice {
        0 => Action::Install,
        1 => Action::Browse,
        2 => Action::Quick,
        3 => Action::Category,
        _ => Action::Exit,
    })
}

/// Multi-select across the whole catalog, grouped by category.
fn select_from_all(registry: &Registry) -> Result<Vec<Agent>> {
    let catalog = registry.catalog();
    let mut ordered: Vec<&Agent> = Vec::new();
    for category in catalog.categories() {
        ordered.extend(catalog.agents_in_category(&category.id));
    }

    let labels: Vec<String> = ordered
        .iter()
        .map(|agent| format!("[{}] {} - {}", agent.category, agent.name, agent.description))
        .collect();
    let picks = MultiSelect::new()
        .with_prompt("Select agents to install (Space to select, Enter to confirm)")
        .items(&labels)
        .interact()
        .map_err(prompt_err)?;

    Ok(picks.into_iter().map(|i| ordered[i].clone()).collect())
}

fn select_from_category(registry: &Registry) -> Result<Vec<Agent>> {
    let catalog = registry.catalog();
    let category = pick_category(registry, "Choose a category")?;
    let agents = catalog.agents_in_category(&category);

    let labels: Vec<String> = agents
        .iter()
        .map(|agent| format!("{} - {}", agent.name, agent.description))
        .collect();
    let picks = MultiSelect::new()
        .with_prompt("Select agents to install (Space to select, Enter to confirm)")
        .items(&labels)
        .interact()
        .map_err(prompt_err)?;

    Ok(picks.into_iter().map(|i| agents[i].clone()).collect())
}

fn select_quick_picks(registry: &Registry) -> Result<Vec<Agent>> {
    let catalog = registry.catalog();
    let available: Vec<&Agent> = QUICK_PICKS
        .iter()
        .filter_map(|id| catalog.agent(id))
        .collect();

    let labels: Vec<String> = available
        .iter()
        .map(|agent| {
            format!(
                "{} ({}) - {}",
                agent.name, agent.category, agent.description
            )
        })
        .collect();
    let checked: Vec<(String, bool)> = labels.into_iter().map(|l| (l, true)).collect();
    let picks = MultiSelect::new()
        .with_prompt("Select popular agents to install")
        .items_checked(&checked)
        .interact()
        .map_err(prompt_err)?;

    Ok(picks.into_iter().map(|i| available[i].clone()).collect())
}

fn select_whole_category(registry: &Registry) -> Result<Vec<Agent>> {
    let catalog = registry.catalog();
    let category = pick_category(registry, "Choose a category to install all agents")?;
    let agents: Vec<Agent> = catalog
        .agents_in_category(&category)
        .into_iter()
        .cloned()
        .collect();

    let confirmed = Confirm::new()
        .with_prompt(format!(
            "Install all {} agents from this category?",
            agents.len()
        ))
        .default(true)
        .interact()
        .map_err(prompt_err)?;
    if !confirmed {
        println!("{}", "\nInstallation cancelled.\n".dimmed());
        return Ok(Vec::new());
    }

    Ok(agents)
}

fn pick_category(registry: &Registry, prompt: &str) -> Result<String> {
    let categories = registry.catalog().categories();
    let labels: Vec<String> = categories
        .iter()
        .map(|cat| format!("{} - {}", cat.name, cat.description))
        .collect();

    let choice = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()
        .map_err(prompt_err)?;
    Ok(categories[choice].id.clone())
}

fn prompt_err(e: dialoguer::Error) -> SquadError {
    SquadError::Prompt(e.to_string())
}
