//! Prediction service client
//!
//! Posts soil samples to the FarmHelp `/predict` endpoint.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use shared::{
    request_prediction, HttpReply, PredictionTransport, RecommendationResult, SoilSample,
    TransportError,
};

use crate::config::ServiceConfig;
use crate::error::AppResult;

/// Client for the prediction service
#[derive(Clone)]
pub struct PredictionClient {
    client: Client,
    base_url: String,
}

impl PredictionClient {
    /// Create a client from service configuration
    pub fn new(config: &ServiceConfig) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request a recommendation for an already validated sample
    pub async fn predict(&self, sample: &SoilSample) -> AppResult<RecommendationResult> {
        Ok(request_prediction(self, sample).await?)
    }
}

impl PredictionTransport for PredictionClient {
    async fn post_json(&self, path: &str, body: String) -> Result<HttpReply, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| TransportError(format!("Prediction request to {} failed: {}", url, e)))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(format!("Failed to read prediction response: {}", e)))?;

        tracing::debug!(status, "prediction response received");
        Ok(HttpReply {
            status,
            content_type,
            body,
        })
    }
}
