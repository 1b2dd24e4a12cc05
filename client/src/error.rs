//! Error handling for the FarmHelp client

use shared::SubmissionError;
use thiserror::Error;

/// Client error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type alias for client operations
pub type AppResult<T> = Result<T, AppError>;
