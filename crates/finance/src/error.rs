use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinanceError {
    #[error("Calculator received invalid input: {0}")]
    InvalidInput(String),

    #[error("An error occurred during calculation: {0}")]
    Calculation(String),
}
