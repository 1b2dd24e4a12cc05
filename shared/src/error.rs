//! Error types for validation and submission

use thiserror::Error;

/// Generic message when the service fails without saying why
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred during prediction";

/// Message when the service answers with something that is not JSON
pub const INVALID_RESPONSE_MESSAGE: &str = "Server error: The server returned an invalid response";

/// First failing soil sample check.
///
/// The display text is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SoilValidationError {
    #[error("Nitrogen (N) must be between 0 and 140")]
    Nitrogen,

    #[error("Phosphorus (P) must be between 0 and 140")]
    Phosphorus,

    #[error("Potassium (K) must be between 0 and 140")]
    Potassium,

    #[error("Temperature must be between 0 and 50°C")]
    Temperature,

    #[error("Humidity must be between 0 and 100%")]
    Humidity,

    #[error("pH must be between 0 and 14")]
    Ph,

    #[error("Rainfall must be between 0 and 300mm")]
    Rainfall,

    #[error("Please select a valid region")]
    Region,
}

impl SoilValidationError {
    /// Form field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            SoilValidationError::Nitrogen => "nitrogen",
            SoilValidationError::Phosphorus => "phosphorus",
            SoilValidationError::Potassium => "potassium",
            SoilValidationError::Temperature => "temperature",
            SoilValidationError::Humidity => "humidity",
            SoilValidationError::Ph => "ph",
            SoilValidationError::Rainfall => "rainfall",
            SoilValidationError::Region => "region",
        }
    }
}

/// The request never produced an HTTP response
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Ways a soil submission can fail
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("{0}")]
    Validation(#[from] SoilValidationError),

    /// HTTP 401; handled by sending the user to the login page
    #[error("Authentication required")]
    Unauthorized,

    #[error("{0}")]
    Server(String),

    #[error("{}", INVALID_RESPONSE_MESSAGE)]
    InvalidResponse,

    #[error("Prediction request failed: {0}")]
    Transport(String),
}

impl SubmissionError {
    /// Text to show the user, `None` when nothing should be displayed
    pub fn user_message(&self) -> Option<String> {
        match self {
            SubmissionError::Unauthorized => None,
            SubmissionError::Transport(_) => Some(GENERIC_FAILURE_MESSAGE.to_string()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_passes_through() {
        let err = SubmissionError::from(SoilValidationError::Ph);
        assert_eq!(err.user_message().as_deref(), Some("pH must be between 0 and 14"));
    }

    #[test]
    fn test_unauthorized_is_silent() {
        assert_eq!(SubmissionError::Unauthorized.user_message(), None);
    }

    #[test]
    fn test_transport_detail_is_hidden_from_user() {
        let err = SubmissionError::Transport("connection refused".into());
        assert_eq!(err.user_message().as_deref(), Some(GENERIC_FAILURE_MESSAGE));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_invalid_response_message() {
        assert_eq!(
            SubmissionError::InvalidResponse.user_message().as_deref(),
            Some(INVALID_RESPONSE_MESSAGE)
        );
    }
}
