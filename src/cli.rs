use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "squad")]
#[command(about = "Install and manage Claude Code subagents from a curated catalog", long_about = None)]
#[command(version = env!("SQUAD_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(after_help = "\
EXAMPLES:
  squad list                        List all available agents
  squad list --category frontend    List agents in a specific category
  squad search react                Search for agents
  squad info react-specialist       Show agent details
  squad install product-manager     Install an agent
  squad init                        Initialize project structure
  squad interactive                 Interactive mode (recommended for beginners)

For details about a specific command, use:
  squad <command> --help")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all available agents
    List {
        /// Filter by category
        #[arg(short = 'c', long)]
        category: Option<String>,

        /// Filter by tags (comma-separated, exact match)
        #[arg(short = 't', long)]
        tags: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search for agents by name, description, or tags
    Search {
        /// Search query (case-insensitive substring)
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Install one or more agents to your project
    Install {
        /// Agent ids to install
        agents: Vec<String>,

        /// Destination directory (default: ./.claude/agents)
        #[arg(short = 'd', long)]
        dest: Option<PathBuf>,

        /// Overwrite existing files
        #[arg(short = 'f', long)]
        force: bool,

        /// Install all agents from a category
        #[arg(long = "all-category", value_name = "CATEGORY")]
        all_category: Option<String>,
    },

    /// Show detailed information about an agent
    Info {
        /// Agent id
        agent_id: String,
    },

    /// Initialize the Claude Code agents structure in your project
    Init {
        /// Project directory (default: current directory)
        #[arg(short = 'd', long)]
        dest: Option<PathBuf>,
    },

    /// Update installed agents to the latest catalog version
    Update {
        /// Agent ids to update
        agents: Vec<String>,

        /// Agents directory (default: ./.claude/agents)
        #[arg(short = 'd', long)]
        dest: Option<PathBuf>,

        /// Update all installed agents
        #[arg(long)]
        all: bool,
    },

    /// Remove an installed agent from your project
    Uninstall {
        /// Agent id
        agent_id: String,

        /// Agents directory (default: ./.claude/agents)
        #[arg(short = 'd', long)]
        dest: Option<PathBuf>,
    },

    /// Interactive mode - guided agent selection and installation
    #[command(alias = "i")]
    Interactive,
}
