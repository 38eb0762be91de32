//! End-to-end install, update, init, and uninstall flows against
//! temporary project directories.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn squad_in(project: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("squad"));
    cmd.env("SQUAD_ROOT", env!("CARGO_MANIFEST_DIR"));
    cmd.current_dir(project);
    cmd
}

fn agents_dir(project: &Path) -> std::path::PathBuf {
    project.join(".claude").join("agents")
}

#[test]
fn test_install_creates_scaffold_and_agent_file() {
    let project = tempfile::tempdir().unwrap();

    squad_in(project.path())
        .args(["install", "react-specialist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully installed 1 agent(s)"));

    let dest = agents_dir(project.path());
    let profile = fs::read_to_string(dest.join("react-specialist.md")).unwrap();
    assert!(profile.contains("# React Specialist"));

    // Scaffold came along: README and .gitignore entry
    assert!(dest.join("README.md").exists());
    let gitignore = fs::read_to_string(project.path().join(".gitignore")).unwrap();
    assert!(gitignore.contains(".claude/"));
}

#[test]
fn test_reinstall_needs_force() {
    let project = tempfile::tempdir().unwrap();

    squad_in(project.path())
        .args(["install", "css-stylist"])
        .assert()
        .success();

    // Second install trips the overwrite guard and exits 1
    squad_in(project.path())
        .args(["install", "css-stylist"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("already exists"));

    // --force overwrites
    squad_in(project.path())
        .args(["install", "css-stylist", "--force"])
        .assert()
        .success();
}

#[test]
fn test_batch_partial_failure_still_installs_the_rest() {
    let project = tempfile::tempdir().unwrap();

    squad_in(project.path())
        .args(["install", "unit-tester"])
        .assert()
        .success();

    // unit-tester already present (fails), e2e-tester is new (succeeds)
    squad_in(project.path())
        .args(["install", "unit-tester", "e2e-tester"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Successfully installed 1 agent(s)"))
        .stdout(predicate::str::contains("Failed to install 1 agent(s)"))
        .stderr(predicate::str::contains("1 agent(s) failed"));

    assert!(agents_dir(project.path()).join("e2e-tester.md").exists());
}

#[test]
fn test_install_all_category() {
    let project = tempfile::tempdir().unwrap();

    squad_in(project.path())
        .args(["install", "--all-category", "frontend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully installed 3 agent(s)"));

    let dest = agents_dir(project.path());
    for id in ["react-specialist", "state-manager", "css-stylist"] {
        assert!(dest.join(format!("{}.md", id)).exists(), "{} missing", id);
    }
}

#[test]
fn test_install_unknown_category_fails() {
    let project = tempfile::tempdir().unwrap();

    squad_in(project.path())
        .args(["install", "--all-category", "mobile"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Category not found: mobile"));
}

#[test]
fn test_update_overwrites_stale_content() {
    let project = tempfile::tempdir().unwrap();

    squad_in(project.path())
        .args(["install", "api-developer"])
        .assert()
        .success();

    let installed = agents_dir(project.path()).join("api-developer.md");
    fs::write(&installed, "stale content\n").unwrap();

    // update forces overwrite without --force
    squad_in(project.path())
        .args(["update", "api-developer"])
        .assert()
        .success();

    let refreshed = fs::read_to_string(&installed).unwrap();
    assert!(refreshed.contains("# API Developer"));
}

#[test]
fn test_update_all_skips_files_not_in_catalog() {
    let project = tempfile::tempdir().unwrap();

    squad_in(project.path())
        .args(["install", "docker-captain"])
        .assert()
        .success();

    // The scaffold README sits in the same directory and has no catalog
    // entry, so --all warns and skips it
    squad_in(project.path())
        .args(["update", "--all"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Some installed agents not found in registry",
        ))
        .stdout(predicate::str::contains("Successfully installed 1 agent(s)"));
}

#[test]
fn test_update_all_with_nothing_installed() {
    let project = tempfile::tempdir().unwrap();

    squad_in(project.path())
        .args(["update", "--all"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No agents installed"));
}

#[test]
fn test_init_is_idempotent() {
    let project = tempfile::tempdir().unwrap();

    squad_in(project.path()).arg("init").assert().success();
    let first = fs::read_to_string(project.path().join(".gitignore")).unwrap();

    squad_in(project.path()).arg("init").assert().success();
    let second = fs::read_to_string(project.path().join(".gitignore")).unwrap();

    assert_eq!(first, second);
    assert_eq!(second.matches(".claude/").count(), 1);
    assert!(agents_dir(project.path()).join("README.md").exists());
}

#[test]
fn test_init_works_without_registry() {
    // init only scaffolds; it must not require a readable catalog
    let project = tempfile::tempdir().unwrap();
    let empty = tempfile::tempdir().unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("squad"));
    cmd.env("SQUAD_ROOT", empty.path());
    cmd.current_dir(project.path());

    cmd.arg("init").assert().success();
    assert!(agents_dir(project.path()).join("README.md").exists());
}

#[test]
fn test_init_with_dest_flag() {
    let project = tempfile::tempdir().unwrap();
    let target = project.path().join("sub");
    fs::create_dir(&target).unwrap();

    squad_in(project.path())
        .args(["init", "--dest"])
        .arg(target.as_os_str())
        .assert()
        .success();

    assert!(target.join(".claude/agents/README.md").exists());
}

#[test]
fn test_uninstall_round_trip() {
    let project = tempfile::tempdir().unwrap();

    squad_in(project.path())
        .args(["install", "prompt-engineer"])
        .assert()
        .success();

    squad_in(project.path())
        .args(["uninstall", "prompt-engineer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Uninstalled agent: prompt-engineer"));

    assert!(!agents_dir(project.path()).join("prompt-engineer.md").exists());

    squad_in(project.path())
        .args(["uninstall", "prompt-engineer"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Agent not installed: prompt-engineer"));
}

#[test]
fn test_custom_dest_flag() {
    let project = tempfile::tempdir().unwrap();
    let dest = project.path().join("custom").join("agents");

    squad_in(project.path())
        .args(["install", "ml-engineer", "--dest"])
        .arg(dest.as_os_str())
        .assert()
        .success();

    assert!(dest.join("ml-engineer.md").exists());
    // Scaffold lands two levels above the destination
    assert!(project.path().join(".gitignore").exists());
}

#[test]
fn test_squad_toml_sets_default_dest() {
    let project = tempfile::tempdir().unwrap();
    fs::write(
        project.path().join("squad.toml"),
        "[install]\ndest = \"team/agents\"\n",
    )
    .unwrap();

    squad_in(project.path())
        .args(["install", "tech-architect"])
        .assert()
        .success();

    assert!(project.path().join("team/agents/tech-architect.md").exists());
}
