use crate::display::{self, TableOptions};
use crate::error::Result;
use crate::registry::{Agent, Registry};
use owo_colors::OwoColorize;

pub fn execute(
    registry: &Registry,
    category: Option<&str>,
    tags: Option<&str>,
    json: bool,
) -> Result<()> {
    let catalog = registry.catalog();

    let agents: Vec<&Agent> = if let Some(category_id) = category {
        let agents = catalog.agents_in_category(category_id);
        if agents.is_empty() {
            println!(
                "{}",
                format!("No agents found in category: {}", category_id).yellow()
            );
            println!("{}", "\nAvailable categories:".dimmed());
            for cat in catalog.categories() {
                println!("  - {}", cat.id);
            }
            return Ok(());
        }
        agents
    } else if let Some(tags) = tags {
        let wanted: Vec<String> = tags.split(',').map(|t| t.trim().to_string()).collect();
        let agents = catalog.filter_by_tags(&wanted);
        if agents.is_empty() {
            println!("{}", format!("No agents found with tags: {}", tags).yellow());
            return Ok(());
        }
        agents
    } else {
        catalog.agents().iter().collect()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&agents)?);
        return Ok(());
    }

    if category.is_none() && tags.is_none() {
        println!("\n{}\n", "Available Claude Code Subagents".cyan().bold());
        display::categories_list(catalog.categories());
        println!();
    }

    display::agents_table(
        &agents,
        &TableOptions {
            show_category: category.is_none(),
            show_tags: true,
        },
    );

    println!();
    println!(
        "{} {} {}",
        "Use".dimmed(),
        "squad info <agent-id>".cyan(),
        "for more details".dimmed()
    );
    println!(
        "{} {} {}",
        "Use".dimmed(),
        "squad install <agent-id>".cyan(),
        "to install an agent".dimmed()
    );

    Ok(())
}
