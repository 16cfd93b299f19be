use thiserror::Error;

/// Application-level errors (command line layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] tabcard_service::error::ServiceError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("Column selection failed after {0} attempts")]
    SelectionAttemptsExhausted(usize),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
