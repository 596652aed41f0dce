use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid index: {index} (budget has {len} entries)")]
    InvalidIndex { index: usize, len: usize },

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}
