use crate::core::git::GitRepository;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .current_dir(dir)
        .args(args)
        .status()
        .expect("Failed to run git");
    assert!(status.success(), "git {:?} failed in {:?}", args, dir);
}

fn init_repo_with_commit(dir: &Path) {
    git(dir, &["init", "--initial-branch=main"]);
    git(dir, &["config", "user.name", "Test User"]);
    git(dir, &["config", "user.email", "test@example.com"]);

    std::fs::write(dir.join("README.md"), "# Test Repository").expect("Failed to write README");
    git(dir, &["add", "README.md"]);
    git(dir, &["commit", "-m", "Initial commit"]);
}

/// Create a throwaway repository with a single commit on `main`.
pub fn setup_test_repo() -> (TempDir, GitRepository) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    init_repo_with_commit(temp_dir.path());

    let repo = GitRepository::discover_from(temp_dir.path()).expect("Failed to discover repo");
    (temp_dir, repo)
}

/// Create a repository tracking a local bare remote, with `branch_name`
/// pushed upstream and then deleted on the remote. After `fetch --prune`
/// the local branch's upstream shows as gone.
pub fn setup_repo_with_gone_branch(branch_name: &str) -> (TempDir, GitRepository) {
    setup_repo_with_gone_branches(&[branch_name])
}

/// Same fixture with several gone-upstream branches.
pub fn setup_repo_with_gone_branches(branch_names: &[&str]) -> (TempDir, GitRepository) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let origin = temp_dir.path().join("origin.git");
    let work = temp_dir.path().join("work");

    std::fs::create_dir_all(&origin).expect("Failed to create origin dir");
    std::fs::create_dir_all(&work).expect("Failed to create work dir");

    git(&origin, &["init", "--bare", "--initial-branch=main"]);
    init_repo_with_commit(&work);
    git(&work, &["remote", "add", "origin", origin.to_str().unwrap()]);
    git(&work, &["push", "-u", "origin", "main"]);

    for name in branch_names {
        git(&work, &["checkout", "-b", name]);
        git(&work, &["push", "-u", "origin", name]);
        git(&work, &["checkout", "main"]);

        // Delete the branch on the remote so the local upstream goes stale.
        git(&origin, &["branch", "-D", name]);
    }

    let repo = GitRepository::discover_from(&work).expect("Failed to discover repo");
    (temp_dir, repo)
}
