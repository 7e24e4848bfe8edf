// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid CPU reading: {0:?}")]
    InvalidReading(String),

    #[error("CPU reading is not finite: {0}")]
    NonFiniteReading(f64),
}

pub type Result<T> = std::result::Result<T, DomainError>;
