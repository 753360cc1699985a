use std::{path::Path, process::Command};

fn main() {
    if let Some(git_dir) = git_output(&["rev-parse", "--git-dir"]) {
        rerun_on_ref_changes(&git_dir);
    }

    // shown by `meowbuddy --version`
    if let Some(git_info) = git_output(&["describe", "--always", "--tags", "--long", "--dirty"]) {
        println!("cargo:rustc-env=_GIT_INFO={git_info}");
    }
}

fn git_output(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8(output.stdout).ok()?;
    Some(stdout.trim().to_string())
}

/// Rebuild when HEAD or any branch/tag ref moves
fn rerun_on_ref_changes(git_dir: &str) {
    let git_path = Path::new(git_dir);
    let candidates = [
        git_path.join("HEAD"),
        git_path.join("packed-refs"),
        git_path.join("refs").join("heads"),
        git_path.join("refs").join("tags"),
    ];
    for path in candidates.iter().filter(|path| path.exists()) {
        println!("cargo:rerun-if-changed={}", path.display());
    }
}
