use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read or write the profile file: {0}")]
    Io(#[from] std::io::Error),

    #[error("The profile file is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Refusing to store an invalid profile: {0}")]
    InvalidProfile(#[from] CoreError),
}
