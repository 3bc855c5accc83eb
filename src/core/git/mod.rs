pub mod branch;
pub mod repository;

pub use branch::BranchManager;
pub use repository::GitRepository;
