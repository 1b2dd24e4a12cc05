//! Common types used by the form front ends

use serde::{Deserialize, Serialize};

/// Prediction endpoint, relative to the site root
pub const PREDICT_PATH: &str = "/predict";

/// Where unauthenticated users are sent
pub const LOGIN_PATH: &str = "/login";

/// Status, content type and body of an HTTP response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpReply {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the content type announces a JSON body
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
            .unwrap_or(false)
    }
}
