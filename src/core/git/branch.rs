use super::repository::{
    execute_git_command, execute_git_command_with_status, execute_git_query, GitRepository,
};
use crate::utils::error::Result;

/// Marker git appends to the upstream annotation in `branch -vv` output when
/// the tracked remote branch no longer exists.
const GONE_MARKER: &str = ": gone]";

pub struct BranchManager<'a> {
    repo: &'a GitRepository,
}

impl<'a> BranchManager<'a> {
    pub fn new(repo: &'a GitRepository) -> Self {
        Self { repo }
    }

    /// Fetch all remotes and prune references to branches deleted upstream.
    /// Progress output streams to the terminal.
    pub fn fetch_prune(&self) -> Result<()> {
        execute_git_command_with_status(self.repo, &["fetch", "--prune", "--all"])
    }

    /// List local branches whose upstream tracking branch is gone, in the
    /// order `git branch -vv` reports them.
    pub fn list_stale_branches(&self) -> Result<Vec<String>> {
        let output = execute_git_command(self.repo, &["branch", "-vv"])?;
        Ok(parse_stale_branches(&output))
    }

    /// Force-delete a local branch, streaming git's output to the terminal.
    /// Unmerged commits reachable only from the branch are discarded.
    pub fn delete_branch(&self, name: &str) -> Result<()> {
        execute_git_command_with_status(self.repo, &["branch", "-D", name])
    }

    /// A negative answer comes from git's exit status; failing to spawn git
    /// at all still surfaces as an error.
    pub fn branch_exists(&self, name: &str) -> Result<bool> {
        execute_git_query(
            self.repo,
            &[
                "show-ref",
                "--verify",
                "--quiet",
                &format!("refs/heads/{}", name),
            ],
        )
    }
}

/// Extract the names of gone-upstream branches from `git branch -vv` output.
///
/// A line is kept iff it contains the gone marker. The branch name is the
/// first whitespace-delimited token after stripping the current-branch `*`
/// indicator and surrounding whitespace.
pub fn parse_stale_branches(listing: &str) -> Vec<String> {
    listing
        .lines()
        .filter(|line| line.contains(GONE_MARKER))
        .filter_map(parse_branch_name)
        .collect()
}

fn parse_branch_name(line: &str) -> Option<String> {
    line.trim_start_matches('*')
        .trim()
        .split_whitespace()
        .next()
        .map(|name| name.to_string())
}
