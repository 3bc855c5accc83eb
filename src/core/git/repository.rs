use crate::utils::error::{Result, SweepError};
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone)]
pub struct GitRepository {
    pub root: PathBuf,
}

impl GitRepository {
    /// Discover the repository containing the current working directory.
    ///
    /// Fails with `SweepError::NotARepository` when the current directory is
    /// not inside a git work tree, which is the one error this tool handles
    /// specially (exit code 1 with a user-facing message).
    pub fn discover() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            SweepError::git_operation(format!("Failed to get current directory: {}", e))
        })?;

        Self::discover_from(&current_dir)
    }

    pub fn discover_from(path: &Path) -> Result<Self> {
        let output = Command::new("git")
            .current_dir(path)
            .args(["rev-parse", "--show-toplevel"])
            .output()
            .map_err(|e| SweepError::git_operation(format!("Failed to execute git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SweepError::not_a_repository(format!(
                "current directory is not inside a work tree: {}",
                stderr.trim()
            )));
        }

        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();

        Ok(Self {
            root: PathBuf::from(root),
        })
    }
}

/// Run a git command in the repository and capture its trimmed stdout.
pub fn execute_git_command(repo: &GitRepository, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .current_dir(&repo.root)
        .args(args)
        .output()
        .map_err(|e| SweepError::git_operation(format!("Failed to execute git: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SweepError::git_operation(format!(
            "Git command failed ({}): {}",
            args.join(" "),
            stderr.trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.trim().to_string())
}

/// Run a git command whose exit status answers a yes/no question.
/// Only a failure to spawn git is an error; a non-zero exit means "no".
pub fn execute_git_query(repo: &GitRepository, args: &[&str]) -> Result<bool> {
    let output = Command::new("git")
        .current_dir(&repo.root)
        .args(args)
        .output()
        .map_err(|e| SweepError::git_operation(format!("Failed to execute git: {}", e)))?;

    Ok(output.status.success())
}

/// Run a git command with inherited stdio so its progress output streams
/// straight to the user's terminal.
pub fn execute_git_command_with_status(repo: &GitRepository, args: &[&str]) -> Result<()> {
    let status = Command::new("git")
        .current_dir(&repo.root)
        .args(args)
        .status()
        .map_err(|e| SweepError::git_operation(format!("Failed to execute git: {}", e)))?;

    if !status.success() {
        return Err(SweepError::git_operation(format!(
            "Git command failed: {}",
            args.join(" ")
        )));
    }

    Ok(())
}
