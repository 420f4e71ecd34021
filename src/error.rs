use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("terminal error: {0}")]
    Terminal(String),
    #[error("logging error: {0}")]
    Logging(String),
}

/// Rejections of a user action. Shown in the error dialog, never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Invalid input. Please enter numeric values for amount.")]
    InvalidAmount,
    #[error("Invalid date format. Please use DD-MM-YYYY format.")]
    InvalidDate,
    #[error("Please select a transaction to delete.")]
    NothingSelected,
    #[error("Amount too large. Totals would exceed the supported range.")]
    TotalOutOfRange,
}
