//! Terminal rendering: agent tables, category lists, info views, and
//! batch install results.

use crate::installer::InstallOutcome;
use crate::registry::{Agent, Category};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use owo_colors::OwoColorize;

pub struct TableOptions {
    pub show_category: bool,
    pub show_tags: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            show_category: true,
            show_tags: true,
        }
    }
}

/// Print agents as a table with a trailing total.
pub fn agents_table(agents: &[&Agent], options: &TableOptions) {
    if agents.is_empty() {
        println!("{}", "No agents found.".yellow());
        return;
    }

    let mut headers = vec!["ID", "Name", "Description"];
    if options.show_category {
        headers.push("Category");
    }
    if options.show_tags {
        headers.push("Tags");
    }

    // Descriptions are pre-truncated, so the table keeps natural column
    // widths instead of wrapping ids across lines.
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(headers);

    for agent in agents {
        let mut row = vec![
            agent.id.clone(),
            agent.name.clone(),
            truncate(&agent.description, 50),
        ];
        if options.show_category {
            row.push(agent.category.clone());
        }
        if options.show_tags {
            // First three tags only; the info view shows them all.
            row.push(agent.tags.iter().take(3).cloned().collect::<Vec<_>>().join(", "));
        }
        table.add_row(row);
    }

    println!("{table}");
    println!("{}", format!("Total: {} agent(s)", agents.len()).dimmed());
}

/// Print categories as a bulleted list.
pub fn categories_list(categories: &[Category]) {
    println!("\n{}\n", "Available Categories:".cyan().bold());
    for category in categories {
        println!(
            "  {} {} {}",
            "●".green(),
            category.name.bold(),
            format!("({})", category.id).dimmed()
        );
        println!("    {}\n", category.description.dimmed());
    }
}

/// Print the detail view for one agent, pulling key sections out of its
/// markdown profile with a plain heading scan.
pub fn agent_info(agent: &Agent, content: &str) {
    println!("\n{}", agent.name.cyan().bold());
    println!("{}", "=".repeat(agent.name.len() + 1).dimmed());

    println!("\n{} {}", "ID:".bold(), agent.id.green());
    println!("{} {}", "Category:".bold(), agent.category.blue());
    println!("{} {}", "Version:".bold(), agent.version);

    println!("\n{}", "Description:".bold());
    println!("  {}", agent.description);

    println!("\n{}", "Tags:".bold());
    let tags: Vec<String> = agent.tags.iter().map(|t| format!("#{}", t.cyan())).collect();
    println!("{}", tags.join("  "));

    if let Some(capabilities) = extract_section(content, "## Capabilities") {
        println!("\n{}", "Capabilities:".bold());
        println!("{}", capabilities);
    }
    if let Some(when_to_use) = extract_section(content, "## When to Use") {
        println!("\n{}", "When to Use:".bold());
        println!("{}", when_to_use);
    }

    println!("\n{}", "Install:".bold());
    println!("  {}", format!("squad install {}", agent.id).cyan());
    println!();
}

/// Print batch results: successes first, then failures with reasons.
pub fn install_results(outcome: &InstallOutcome) {
    if !outcome.installed.is_empty() {
        println!(
            "\n{}",
            format!(
                "✓ Successfully installed {} agent(s):",
                outcome.installed.len()
            )
            .green()
            .bold()
        );
        for agent in &outcome.installed {
            println!(
                "  {} {} {}",
                "●".green(),
                agent.name,
                format!("({})", agent.id).dimmed()
            );
        }
    }

    if !outcome.failed.is_empty() {
        println!(
            "\n{}",
            format!("✗ Failed to install {} agent(s):", outcome.failed.len())
                .red()
                .bold()
        );
        for failure in &outcome.failed {
            println!("  {} {}: {}", "●".red(), failure.agent.name, failure.reason);
        }
    }
}

pub fn success(message: &str) {
    println!("{}", format!("✓ {}", message).green());
}

pub fn error(message: &str) {
    eprintln!("{}", format!("✗ {}", message).red());
}

pub fn warning(message: &str) {
    eprintln!("{}", format!("⚠ {}", message).yellow());
}

pub fn info(message: &str) {
    println!("{}", format!("ℹ {}", message).cyan());
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", cut)
}

/// Lines between `heading` and the next `## ` heading, indented and capped
/// at 500 characters. Not a markdown parser: a verbatim line that happens
/// to start with `## ` ends the section.
fn extract_section(content: &str, heading: &str) -> Option<String> {
    let lines: Vec<&str> = content.lines().collect();
    let start = lines.iter().position(|line| line.trim() == heading)?;

    let body: Vec<String> = lines[start + 1..]
        .iter()
        .take_while(|line| !line.starts_with("## "))
        .filter(|line| !line.trim().is_empty())
        .map(|line| format!("  {}", line))
        .collect();

    let mut section = body.join("\n");
    if let Some((cap, _)) = section.char_indices().nth(500) {
        section.truncate(cap);
    }
    Some(section)
}
