use crate::display;
use crate::error::{Result, SquadError};
use crate::registry::Registry;
use owo_colors::OwoColorize;

pub fn execute(registry: &Registry, agent_id: &str) -> Result<()> {
    let Some(agent) = registry.catalog().agent(agent_id) else {
        eprintln!(
            "{} {} {}",
            "Use".dimmed(),
            "squad list".cyan(),
            "to see available agents".dimmed()
        );
        eprintln!(
            "{} {} {}",
            "Use".dimmed(),
            "squad search <query>".cyan(),
            "to search for agents".dimmed()
        );
        return Err(SquadError::AgentNotFound(agent_id.to_string()));
    };

    let content = registry.read_agent_file(agent)?;
    display::agent_info(agent, &content);

    Ok(())
}
