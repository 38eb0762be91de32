//! Optional per-project configuration (`squad.toml`).

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "squad.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub install: InstallConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallConfig {
    /// Default destination directory, relative to the project directory.
    #[serde(default = "default_dest")]
    pub dest: String,

    /// Overwrite existing files by default.
    #[serde(default)]
    pub force: bool,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            dest: default_dest(),
            force: false,
        }
    }
}

fn default_dest() -> String {
    ".claude/agents".to_string()
}

impl Config {
    /// Load `squad.toml` from the project directory, or defaults if the
    /// file does not exist. A present-but-malformed file is an error.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Destination directory: `--dest` flag wins, then the configured
    /// default resolved against the project directory.
    pub fn dest_dir(&self, project_dir: &Path, flag: Option<&Path>) -> PathBuf {
        match flag {
            Some(dest) => dest.to_path_buf(),
            None => project_dir.join(&self.install.dest),
        }
    }
}
