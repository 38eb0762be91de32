//! Materializes agent profiles as files in a destination directory.
//!
//! Installs are strictly sequential. A batch never aborts on a per-agent
//! failure; partial success is an expected outcome and is reported per
//! item. There is no locking against concurrent invocations and no
//! rollback: a killed batch leaves already-copied files in place.

use crate::error::{Result, SquadError};
use crate::registry::{Agent, Registry};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Overwrite an existing `<id>.md` instead of failing.
    pub force: bool,
}

/// One agent that could not be installed, with the reason.
#[derive(Debug, Clone)]
pub struct InstallFailure {
    pub agent: Agent,
    pub reason: String,
}

/// Aggregated outcome of a batch install. Entries follow input order.
#[derive(Debug, Clone, Default)]
pub struct InstallOutcome {
    pub installed: Vec<Agent>,
    pub failed: Vec<InstallFailure>,
}

fn dest_path(agent_id: &str, dest_dir: &Path) -> PathBuf {
    dest_dir.join(format!("{}.md", agent_id))
}

/// Copy one agent's profile into `dest_dir` as `<id>.md`.
///
/// Creates `dest_dir` (and parents) if needed. Fails with `FileExists`
/// when the target is present and `force` is off; the caller decides
/// whether to surface that or retry with force.
pub fn install(
    registry: &Registry,
    agent: &Agent,
    dest_dir: &Path,
    options: &InstallOptions,
) -> Result<()> {
    fs::create_dir_all(dest_dir)?;

    let source = registry.agent_file_path(agent);
    let dest = dest_path(&agent.id, dest_dir);

    if !options.force && dest.exists() {
        return Err(SquadError::FileExists(dest));
    }

    fs::copy(&source, &dest)?;
    Ok(())
}

/// Install each agent independently, collecting per-item outcomes.
pub fn install_many(
    registry: &Registry,
    agents: &[Agent],
    dest_dir: &Path,
    options: &InstallOptions,
) -> InstallOutcome {
    let mut outcome = InstallOutcome::default();

    for agent in agents {
        match install(registry, agent, dest_dir, options) {
            Ok(()) => outcome.installed.push(agent.clone()),
            Err(e) => outcome.failed.push(InstallFailure {
                agent: agent.clone(),
                reason: e.to_string(),
            }),
        }
    }

    outcome
}

/// Existence check only. A file with stale content still counts as
/// installed; there is no content comparison.
pub fn is_installed(agent: &Agent, dest_dir: &Path) -> bool {
    dest_path(&agent.id, dest_dir).exists()
}

/// Ids of installed agents, reconstructed from the directory listing.
/// Returns empty if the directory is missing or unreadable. Any `.md`
/// file counts, including a README.
pub fn list_installed(dest_dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(dest_dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut ids: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            name.strip_suffix(".md").map(|stem| stem.to_string())
        })
        .collect();
    ids.sort();
    ids
}

/// Remove an installed agent's file.
pub fn uninstall(agent_id: &str, dest_dir: &Path) -> Result<()> {
    let dest = dest_path(agent_id, dest_dir);

    if !dest.exists() {
        return Err(SquadError::NotInstalled(agent_id.to_string()));
    }

    fs::remove_file(&dest)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        _root: tempfile::TempDir,
        registry: Registry,
        dest: tempfile::TempDir,
        agents: Vec<Agent>,
    }

    /// Registry root with two agents in one category, plus an empty dest.
    fn fixture() -> Fixture {
        let root = tempfile::tempdir().unwrap();
        fs::write(
            root.path().join("registry.json"),
            r#"{
                "categories": [{"id": "frontend", "name": "Frontend", "description": ""}],
                "agents": [
                    {"id": "react-specialist", "name": "React Specialist", "description": "",
                     "category": "frontend", "tags": ["react"], "version": "1.0.0"},
                    {"id": "css-stylist", "name": "CSS Stylist", "description": "",
                     "category": "frontend", "tags": ["css"], "version": "1.0.0"}
                ]
            }"#,
        )
        .unwrap();
        let agents_dir = root.path().join("agents/frontend");
        fs::create_dir_all(&agents_dir).unwrap();
        fs::write(agents_dir.join("react-specialist.md"), "# React Specialist\n").unwrap();
        fs::write(agents_dir.join("css-stylist.md"), "# CSS Stylist\n").unwrap();

        let registry = Registry::open(root.path()).unwrap();
        let agents = registry.catalog().agents().to_vec();
        Fixture {
            _root: root,
            registry,
            dest: tempfile::tempdir().unwrap(),
            agents,
        }
    }

    #[test]
    fn install_copies_content_verbatim() {
        let fx = fixture();
        let dest = fx.dest.path().join("nested/agents");

        install(&fx.registry, &fx.agents[0], &dest, &InstallOptions::default()).unwrap();

        let installed = fs::read_to_string(dest.join("react-specialist.md")).unwrap();
        assert_eq!(installed, "# React Specialist\n");
    }

    #[test]
    fn reinstall_without_force_trips_overwrite_guard() {
        let fx = fixture();
        let opts = InstallOptions::default();

        install(&fx.registry, &fx.agents[0], fx.dest.path(), &opts).unwrap();
        let err = install(&fx.registry, &fx.agents[0], fx.dest.path(), &opts).unwrap_err();
        assert!(matches!(err, SquadError::FileExists(_)));
    }

    #[test]
    fn reinstall_with_force_replaces_content() {
        let fx = fixture();
        let dest_file = fx.dest.path().join("react-specialist.md");
        fs::write(&dest_file, "stale\n").unwrap();

        install(
            &fx.registry,
            &fx.agents[0],
            fx.dest.path(),
            &InstallOptions { force: true },
        )
        .unwrap();

        assert_eq!(fs::read_to_string(&dest_file).unwrap(), "# React Specialist\n");
    }

    #[test]
    fn batch_partial_failure_does_not_abort() {
        let fx = fixture();
        // First agent pre-installed so the guard fails it; second is new.
        fs::write(fx.dest.path().join("react-specialist.md"), "old\n").unwrap();

        let outcome = install_many(
            &fx.registry,
            &fx.agents,
            fx.dest.path(),
            &InstallOptions::default(),
        );

        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].agent.id, "react-specialist");
        assert!(outcome.failed[0].reason.contains("already exists"));
        // The failure did not prevent the second agent from installing.
        assert_eq!(outcome.installed.len(), 1);
        assert_eq!(outcome.installed[0].id, "css-stylist");
        assert!(fx.dest.path().join("css-stylist.md").exists());
    }

    #[test]
    fn is_installed_checks_existence_only() {
        let fx = fixture();
        assert!(!is_installed(&fx.agents[0], fx.dest.path()));
        fs::write(fx.dest.path().join("react-specialist.md"), "anything\n").unwrap();
        assert!(is_installed(&fx.agents[0], fx.dest.path()));
    }

    #[test]
    fn list_installed_strips_extension_and_includes_readme() {
        let fx = fixture();
        fs::write(fx.dest.path().join("a.md"), "").unwrap();
        fs::write(fx.dest.path().join("b.md"), "").unwrap();
        fs::write(fx.dest.path().join("README.md"), "").unwrap();
        fs::write(fx.dest.path().join("notes.txt"), "").unwrap();

        // The scan cannot tell a README from an agent id; known boundary.
        assert_eq!(list_installed(fx.dest.path()), vec!["README", "a", "b"]);
    }

    #[test]
    fn list_installed_missing_dir_is_empty() {
        let fx = fixture();
        assert!(list_installed(&fx.dest.path().join("nope")).is_empty());
    }

    #[test]
    fn uninstall_removes_file_or_fails_when_absent() {
        let fx = fixture();
        fs::write(fx.dest.path().join("react-specialist.md"), "x\n").unwrap();

        uninstall("react-specialist", fx.dest.path()).unwrap();
        assert!(!fx.dest.path().join("react-specialist.md").exists());

        let err = uninstall("react-specialist", fx.dest.path()).unwrap_err();
        assert!(matches!(err, SquadError::NotInstalled(_)));
    }
}
