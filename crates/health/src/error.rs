use thiserror::Error;

#[derive(Error, Debug)]
pub enum HealthError {
    #[error("Calculator received invalid input: {0}")]
    InvalidInput(String),
}
