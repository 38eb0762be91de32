use crate::config::Config;
use crate::display;
use crate::error::Result;
use crate::installer;
use std::path::Path;

pub fn execute(config: &Config, agent_id: &str, dest: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let dest_dir = config.dest_dir(&cwd, dest);

    installer::uninstall(agent_id, &dest_dir)?;

    display::success(&format!("Uninstalled agent: {}", agent_id));
    Ok(())
}
