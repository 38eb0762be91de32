use crate::display::{self, TableOptions};
use crate::error::Result;
use crate::registry::Registry;
use owo_colors::OwoColorize;

pub fn execute(registry: &Registry, query: &str, json: bool) -> Result<()> {
    let results = registry.catalog().search(query);

    if results.is_empty() {
        println!(
            "{}",
            format!("No agents found matching: \"{}\"", query).yellow()
        );
        println!("{}", "\nTry:".dimmed());
        println!(
            "  {} {}",
            "squad list".cyan(),
            "- to see all available agents".dimmed()
        );
        println!(
            "  {} {}",
            "squad search <different-query>".cyan(),
            "- to search with different terms".dimmed()
        );
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!(
        "\n{}\n",
        format!("Search results for: \"{}\"", query).cyan().bold()
    );
    display::agents_table(&results, &TableOptions::default());

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
