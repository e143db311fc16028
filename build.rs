use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn main() {
    let hash = short_git_hash().unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=SHAPESCRIBER_GIT_HASH={hash}");

    // Rebuild when the checked-out commit changes, not on every build.
    if let Some(git_dir) = locate_git_dir() {
        for entry in ["HEAD", "refs", "packed-refs"] {
            let path = git_dir.join(entry);
            if path.exists()
                && let Some(utf8) = path.to_str()
            {
                println!("cargo:rerun-if-changed={utf8}");
            }
        }
    }
}

fn short_git_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!hash.is_empty()).then_some(hash)
}

fn locate_git_dir() -> Option<PathBuf> {
    if let Some(from_env) = env::var_os("GIT_DIR") {
        return Some(PathBuf::from(from_env));
    }

    let dot_git = Path::new(".git");
    if dot_git.is_dir() {
        return Some(dot_git.to_path_buf());
    }

    // Worktrees and submodules keep a pointer file instead of a directory.
    let contents = fs::read_to_string(dot_git).ok()?;
    let target = contents.strip_prefix("gitdir:")?.trim();
    let mut resolved = PathBuf::from(target);
    if resolved.is_relative()
        && let Some(parent) = dot_git.parent()
    {
        resolved = parent.join(resolved);
    }
    Some(resolved)
}
