//! Prediction service payloads

use serde::{Deserialize, Serialize};

/// Crop recommendation returned by `POST /predict`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationResult {
    pub crop: String,
    pub description: String,
    pub fertilizers: Vec<String>,
    pub tips: String,
}

impl RecommendationResult {
    pub fn crop_or_default(&self) -> &str {
        if self.crop.is_empty() {
            "Unknown crop"
        } else {
            &self.crop
        }
    }

    pub fn description_or_default(&self) -> &str {
        if self.description.is_empty() {
            "No description available"
        } else {
            &self.description
        }
    }
}

/// Error body the prediction service sends with non-2xx statuses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
