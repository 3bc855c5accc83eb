use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("Not a git repository: {0}")]
    NotARepository(String),

    #[error("Git operation failed: {0}")]
    GitOperation(String),

    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("Failed to read input: {0}")]
    ReadInput(String),
}

impl SweepError {
    pub fn not_a_repository(msg: impl Into<String>) -> Self {
        SweepError::NotARepository(msg.into())
    }

    pub fn git_operation(msg: impl Into<String>) -> Self {
        SweepError::GitOperation(msg.into())
    }

    pub fn invalid_args(msg: impl Into<String>) -> Self {
        SweepError::InvalidArgs(msg.into())
    }

    pub fn read_input(msg: impl Into<String>) -> Self {
        SweepError::ReadInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SweepError>;
