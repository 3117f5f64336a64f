use dialkeep_store::error::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, BatchError>;
