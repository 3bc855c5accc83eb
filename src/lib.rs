pub mod cli;
pub mod core;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

pub use crate::core::git::{BranchManager, GitRepository};
pub use crate::utils::{Result, SweepError};
