//! Project scaffold: the `.claude/agents` tree, `.gitignore` entry, and
//! the agents README.

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

const GITIGNORE_ENTRY: &str = "# Claude Code\n.claude/\n";

const AGENTS_README: &str = "\
# Squad Agents

This directory contains Claude Code subagents installed from the Squad
catalog.

## Installed Agents

Use `squad list` to see available agents.
Use `squad install <agent-id>` to install more agents.
Use `squad info <agent-id>` to see agent details.

## Usage

In Claude Code, you can invoke agents like:

```
Use the agent <agent-id> to <task>
```
";

/// Paths created or touched by `initialize_project`, for caller display.
#[derive(Debug, Clone)]
pub struct ScaffoldPaths {
    pub claude_dir: PathBuf,
    pub agents_dir: PathBuf,
    pub readme_path: PathBuf,
}

/// Ensure the project scaffold exists. Idempotent: directories are created
/// only if missing, the `.gitignore` entry is appended only if the file
/// does not already mention `.claude`, and the README is rewritten each
/// time. No rollback on partial failure.
pub fn initialize_project(project_dir: &Path) -> Result<ScaffoldPaths> {
    let claude_dir = project_dir.join(".claude");
    let agents_dir = claude_dir.join("agents");
    fs::create_dir_all(&agents_dir)?;

    ensure_gitignore_entry(project_dir)?;

    let readme_path = agents_dir.join("README.md");
    fs::write(&readme_path, AGENTS_README)?;

    Ok(ScaffoldPaths {
        claude_dir,
        agents_dir,
        readme_path,
    })
}

/// Append the `.claude/` ignore entry unless the file already mentions
/// `.claude`. Existing content is preserved.
fn ensure_gitignore_entry(project_dir: &Path) -> Result<()> {
    let gitignore_path = project_dir.join(".gitignore");

    let existing = if gitignore_path.exists() {
        fs::read_to_string(&gitignore_path)?
    } else {
        String::new()
    };

    if existing.contains(".claude") {
        return Ok(());
    }

    let updated = if existing.is_empty() {
        GITIGNORE_ENTRY.to_string()
    } else {
        format!("{}\n\n{}", existing.trim_end_matches('\n'), GITIGNORE_ENTRY)
    };
    fs::write(&gitignore_path, updated)?;
    Ok(())
}
