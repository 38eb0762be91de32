use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SquadError {
    #[error("Failed to load registry: {0}")]
    RegistryLoad(String),

    #[error("Agent not found: {0}")]
    AgentNotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Agent already exists: {}. Use --force to overwrite.", .0.display())]
    FileExists(PathBuf),

    #[error("Agent not installed: {0}")]
    NotInstalled(String),

    #[error("Failed to read agent file: {0}")]
    AgentFileRead(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to get user input: {0}")]
    Prompt(String),

    #[error("{0}")]
    InvalidArguments(String),

    #[error("{0} agent(s) failed")]
    PartialFailure(usize),
}

pub type Result<T> = std::result::Result<T, SquadError>;
