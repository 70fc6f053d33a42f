use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Serialize)]
pub enum CashoutError {
    /// Generic input validation error with detailed field information
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),

    /// A player with the same name is already on the ledger
    #[error("Player {0} already on the ledger")]
    DuplicatePlayer(String),

    #[error("Player {0} not found")]
    PlayerNotFound(String),

    /// Total cash-out differs from total buy-in by the given amount
    #[error("Ledger does not balance: cash-out minus buy-in is {0:.2}")]
    UnbalancedLedger(f64),

    #[error("Ledger is full: at most {0} players")]
    TooManyPlayers(usize),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),
}

impl CashoutError {
    pub(crate) fn invalid(field: &str, title: impl Into<String>, description: impl Into<String>) -> Self {
        CashoutError::InvalidInput(
            field.to_string(),
            FieldError {
                field: field.to_string(),
                title: title.into(),
                description: description.into(),
            },
        )
    }
}
