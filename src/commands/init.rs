use crate::display;
use crate::error::Result;
use crate::scaffold;
use indicatif::ProgressBar;
use owo_colors::OwoColorize;
use std::path::Path;
use std::time::Duration;

pub fn execute(dest: Option<&Path>) -> Result<()> {
    let project_dir = match dest {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?,
    };

    println!(
        "\n{}\n",
        "Initializing Claude Code agents structure...".cyan()
    );
    display::info(&format!("Project directory: {}", project_dir.display()));
    println!();

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Creating directories...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let paths = scaffold::initialize_project(&project_dir);
    spinner.finish_and_clear();

    let paths = match paths {
        Ok(paths) => paths,
        Err(e) => {
            display::error("Failed to create directories");
            return Err(e);
        }
    };
    display::success("Directories created");

    println!();
    display::success("Project initialized successfully!");
    println!();
    println!("{}", "Created:".bold());
    println!("  {}", paths.claude_dir.display().cyan());
    println!("  {}", paths.agents_dir.display().cyan());
    println!("  {}", paths.readme_path.display().cyan());
    println!();
    println!("{}", "Next steps:".bold());
    println!(
        "  {} {} {}",
        "1.".dimmed(),
        "squad list".cyan(),
        "- Browse available agents".dimmed()
    );
    println!(
        "  {} {} {}",
        "2.".dimmed(),
        "squad install <agent-id>".cyan(),
        "- Install agents".dimmed()
    );
    println!(
        "  {} {} {}",
        "3.".dimmed(),
        "squad interactive".cyan(),
        "- Use interactive mode".dimmed()
    );
    println!();

    Ok(())
}
