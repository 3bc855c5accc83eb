use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "git-sweep")]
#[command(about = "Delete local branches whose upstream tracking branch is gone")]
#[command(version)]
pub struct Cli {
    /// List stale branches without deleting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Delete all stale branches without prompting
    #[arg(long, short)]
    pub force: bool,
}
