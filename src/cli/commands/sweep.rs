use crate::cli::parser::Cli;
use crate::core::git::{BranchManager, GitRepository};
use crate::utils::{Result, SweepError};
use dialoguer::{theme::ColorfulTheme, MultiSelect};

/// Names only the bindings dialoguer's checklist actually handles: space,
/// 'a', and enter. There is no invert binding.
const SELECT_PROMPT: &str =
    "Select branches to delete (space to toggle, a to toggle all, enter to confirm)";

pub fn execute(args: Cli) -> Result<()> {
    let repo = GitRepository::discover()?;
    run(&repo, &args)
}

/// The whole workflow, in order: sync remotes, scan for gone upstreams,
/// select, delete. Every step is a blocking git call; any failure aborts
/// the run.
pub fn run(repo: &GitRepository, args: &Cli) -> Result<()> {
    let branches = BranchManager::new(repo);

    println!("🔄 Syncing remotes and pruning deleted references...");
    branches.fetch_prune()?;

    let stale = branches.list_stale_branches()?;
    if stale.is_empty() {
        println!("✨ No stale branches found - nothing to clean up!");
        return Ok(());
    }

    if args.dry_run {
        show_dry_run_report(&stale);
        return Ok(());
    }

    let selected = select_branches(&stale, args.force)?;
    if selected.is_empty() {
        println!("👋 Cancelled - no branches were deleted");
        return Ok(());
    }

    println!("🗑  Deleting {} stale branches...", selected.len());
    delete_selected(&branches, &selected)?;
    println!("✅ Deleted {} stale branches", selected.len());

    Ok(())
}

/// One forced delete per selected branch; the first failure aborts the rest.
fn delete_selected(branches: &BranchManager, selected: &[String]) -> Result<()> {
    for branch in selected {
        branches.delete_branch(branch)?;
    }
    Ok(())
}

fn is_non_interactive() -> bool {
    std::env::var("GIT_SWEEP_NON_INTERACTIVE").is_ok()
        || std::env::var("CI").is_ok()
        || !atty::is(atty::Stream::Stdin)
}

fn select_branches(stale: &[String], force: bool) -> Result<Vec<String>> {
    if force {
        return Ok(stale.to_vec());
    }

    if is_non_interactive() {
        return Err(SweepError::invalid_args(
            "Cannot prompt for branch selection in non-interactive mode. \
             Use --force to delete all stale branches.",
        ));
    }

    let selection = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(SELECT_PROMPT)
        .items(stale)
        .max_length(20)
        .interact()
        .map_err(|e| SweepError::read_input(e.to_string()))?;

    Ok(apply_selection(stale, &selection))
}

/// Map confirmed checklist indices back to branch names, keeping the
/// scanner's listing order.
fn apply_selection(stale: &[String], indices: &[usize]) -> Vec<String> {
    indices.iter().map(|&i| stale[i].clone()).collect()
}

fn show_dry_run_report(stale: &[String]) {
    println!("Stale branches ({}):", stale.len());
    for branch in stale {
        println!("  🌿 {}", branch);
    }
    println!();
    println!("Dry run - nothing was deleted");
}
