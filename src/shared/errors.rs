//! Error handling for the application

use thiserror::Error;

/// Errors raised while building a transaction descriptor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error("Invalid argument encoding: {0}")]
    InvalidArgumentEncoding(String),

    #[error("Transaction construction failed: {0}")]
    Construction(String),
}

/// Identifier parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Identifier is empty")]
    Empty,

    #[error("Identifier is not hex: {0}")]
    InvalidHex(String),

    #[error("Identifier longer than 32 bytes: {0}")]
    TooLong(String),
}

/// General application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Identifier error: {0}")]
    IdentifierError(String),

    #[error("Transaction error: {0}")]
    TransactionError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<TransactionError> for AppError {
    fn from(err: TransactionError) -> Self {
        AppError::TransactionError(err.to_string())
    }
}

impl From<IdentifierError> for AppError {
    fn from(err: IdentifierError) -> Self {
        AppError::IdentifierError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}
