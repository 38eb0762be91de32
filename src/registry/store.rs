//! Registry store: resolves the catalog root, loads `registry.json`, and
//! reads agent profile content.

use super::definition::{Agent, CatalogFile};
use super::query::Catalog;
use crate::error::{Result, SquadError};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the catalog file under the registry root.
const CATALOG_FILE: &str = "registry.json";

/// Environment variable overriding the registry root.
pub const ROOT_ENV_VAR: &str = "SQUAD_ROOT";

/// A loaded registry: the catalog plus the root it was loaded from, which
/// is also where agent profile files live (`<root>/agents/<category>/<id>.md`).
#[derive(Debug)]
pub struct Registry {
    root: PathBuf,
    catalog: Catalog,
}

impl Registry {
    /// Open a registry rooted at an explicit path. The root is taken as
    /// given so tests and callers never depend on ambient state.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let catalog_path = root.join(CATALOG_FILE);

        let data = fs::read_to_string(&catalog_path).map_err(|e| {
            SquadError::RegistryLoad(format!("{}: {}", catalog_path.display(), e))
        })?;
        let file: CatalogFile = serde_json::from_str(&data).map_err(|e| {
            SquadError::RegistryLoad(format!("{}: {}", catalog_path.display(), e))
        })?;

        Ok(Self {
            root,
            catalog: Catalog::new(file),
        })
    }

    /// Open the registry at the conventional location: `SQUAD_ROOT` if set,
    /// otherwise the bundled catalog shipped with this checkout.
    pub fn discover() -> Result<Self> {
        let root = match std::env::var_os(ROOT_ENV_VAR) {
            Some(value) => PathBuf::from(value),
            None => PathBuf::from(env!("CARGO_MANIFEST_DIR")),
        };
        Self::open(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Source path of an agent's profile. The category segment comes from
    /// the agent record and is not validated against the category set.
    pub fn agent_file_path(&self, agent: &Agent) -> PathBuf {
        self.root
            .join("agents")
            .join(&agent.category)
            .join(format!("{}.md", agent.id))
    }

    /// Read an agent's markdown profile.
    pub fn read_agent_file(&self, agent: &Agent) -> Result<String> {
        let path = self.agent_file_path(agent);
        fs::read_to_string(&path)
            .map_err(|e| SquadError::AgentFileRead(format!("{}: {}", path.display(), e)))
    }
}
