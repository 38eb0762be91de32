#![forbid(unsafe_code)]

use clap::Parser;

use squad::cli::{Cli, Commands};
use squad::config::Config;
use squad::registry::Registry;
use squad::{commands, display};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Exit code contract: 0 on success, 1 on any unresolved error or
    // partial batch failure. clap reserves 2 for parse errors.
    if let Err(e) = run(cli) {
        display::error(&e.to_string());
        std::process::exit(1);
    }
    Ok(())
}

fn run(cli: Cli) -> squad::error::Result<()> {
    // The catalog is loaded per command: init and uninstall work purely on
    // the project directory and stay usable without a readable registry.
    match cli.command {
        Commands::Init { dest } => commands::init::execute(dest.as_deref()),
        Commands::List {
            category,
            tags,
            json,
        } => {
            let registry = Registry::discover()?;
            commands::list::execute(&registry, category.as_deref(), tags.as_deref(), json)
        }
        Commands::Search { query, json } => {
            let registry = Registry::discover()?;
            commands::search::execute(&registry, &query, json)
        }
        Commands::Install {
            agents,
            dest,
            force,
            all_category,
        } => {
            let registry = Registry::discover()?;
            let config = Config::load(&std::env::current_dir()?)?;
            commands::install::execute(
                &registry,
                &config,
                &agents,
                dest.as_deref(),
                force,
                all_category.as_deref(),
            )
        }
        Commands::Info { agent_id } => {
            let registry = Registry::discover()?;
            commands::info::execute(&registry, &agent_id)
        }
        Commands::Update { agents, dest, all } => {
            let registry = Registry::discover()?;
            let config = Config::load(&std::env::current_dir()?)?;
            commands::update::execute(&registry, &config, &agents, dest.as_deref(), all)
        }
        Commands::Uninstall { agent_id, dest } => {
            let config = Config::load(&std::env::current_dir()?)?;
            commands::uninstall::execute(&config, &agent_id, dest.as_deref())
        }
        Commands::Interactive => {
            let registry = Registry::discover()?;
            commands::interactive::execute(&registry)
        }
    }
}
