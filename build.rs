use std::env;
use std::process::Command;

fn main() {
    let version = env::var("CARGO_PKG_VERSION").unwrap();
    let profile = env::var("PROFILE").unwrap();

    // Dev builds carry the short git hash so bug reports identify the build
    let full_version = if profile == "debug" {
        let git_hash = git_short_hash().unwrap_or_else(|| "unknown".to_string());
        format!("{}-dev+{}", version, git_hash)
    } else {
        version
    };

    println!("cargo:rustc-env=SQUAD_VERSION={}", full_version);
    println!("cargo:rerun-if-changed=.git/HEAD");
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()?;

    if output.status.success() {
        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        None
    }
}
