use thiserror::Error;

pub type SyncResult<T> = Result<T, SyncError>;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("invalid chapter payload: {0}")]
    Parse(String),

    #[error("chapter table is empty")]
    EmptyTable,

    #[error("chapter index {index} is out of range for {len} chapters")]
    OutOfRange { index: usize, len: usize },

    #[error("dependency `{dependency}` not found after {attempts} attempts")]
    DependencyTimeout {
        dependency: &'static str,
        attempts: u32,
    },

    #[error("dependency `{0}` is not available")]
    DependencyMissing(&'static str),

    #[error("listener with id `{0}` is already registered")]
    DuplicateListener(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
