//! Soil form submission pipeline
//!
//! Validates a sample, posts it to the prediction service, and drives a view
//! through the outcome. The HTTP client and the view are supplied by the
//! caller so the same flow runs in the browser and on the command line.

use std::future::Future;

use crate::enrichment;
use crate::error::{SubmissionError, TransportError, GENERIC_FAILURE_MESSAGE};
use crate::models::{PredictErrorBody, RecommendationResult, SoilFormInput, SoilSample};
use crate::types::{HttpReply, LOGIN_PATH, PREDICT_PATH};
use crate::validation::validate_soil_sample;

/// Sends a JSON body to the prediction service
pub trait PredictionTransport {
    /// POST `body` to `path` with `Content-Type: application/json`
    fn post_json(
        &self,
        path: &str,
        body: String,
    ) -> impl Future<Output = Result<HttpReply, TransportError>>;
}

/// Output surface for the soil form
pub trait SoilFormView {
    /// Remove any message left by a previous submission
    fn clear_error(&self);

    fn show_error(&self, message: &str);

    /// Reveal the results area and the loading indicator
    fn show_loading(&self);

    /// Hide the loading indicator and bring the results area into view
    fn finish_loading(&self);

    fn render(&self, recommendation: &RecommendationResult);

    fn redirect(&self, path: &str);
}

/// Submission behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionOptions {
    /// Extend description and tips with N/P/K commentary
    pub enrich: bool,
}

impl Default for SubmissionOptions {
    fn default() -> Self {
        Self { enrich: true }
    }
}

/// Handle a soil form submission from raw field values
pub async fn submit_soil_form<T, V>(
    transport: &T,
    view: &V,
    input: &SoilFormInput,
    options: SubmissionOptions,
) -> Result<RecommendationResult, SubmissionError>
where
    T: PredictionTransport,
    V: SoilFormView,
{
    view.clear_error();
    let sample = SoilSample::from_form(input);
    submit_sample(transport, view, &sample, options).await
}

/// Validate, send and render one sample.
///
/// Validation failures are shown before any indicator appears and no
/// request is made. Once a request is attempted the loading indicator is
/// always cleared, whatever the outcome.
pub async fn submit_sample<T, V>(
    transport: &T,
    view: &V,
    sample: &SoilSample,
    options: SubmissionOptions,
) -> Result<RecommendationResult, SubmissionError>
where
    T: PredictionTransport,
    V: SoilFormView,
{
    if let Err(err) = validate_soil_sample(sample) {
        tracing::debug!(field = err.field(), "soil sample rejected");
        view.show_error(&err.to_string());
        return Err(err.into());
    }

    view.show_loading();
    let outcome = request_prediction(transport, sample).await;

    match &outcome {
        Ok(result) => view.render(&present(result, sample, options)),
        Err(SubmissionError::Unauthorized) => view.redirect(LOGIN_PATH),
        Err(err) => {
            if let Some(message) = err.user_message() {
                view.show_error(&message);
            }
        }
    }

    view.finish_loading();
    outcome
}

/// Post a validated sample and interpret the reply
pub async fn request_prediction<T>(
    transport: &T,
    sample: &SoilSample,
) -> Result<RecommendationResult, SubmissionError>
where
    T: PredictionTransport,
{
    let body = serde_json::to_string(sample)
        .map_err(|e| SubmissionError::Transport(format!("Failed to encode sample: {}", e)))?;

    tracing::debug!(path = PREDICT_PATH, "sending prediction request");
    let reply = transport.post_json(PREDICT_PATH, body).await.map_err(|e| {
        tracing::error!("Prediction request failed: {}", e);
        SubmissionError::Transport(e.0)
    })?;

    interpret_reply(reply)
}

/// Map a raw HTTP reply onto a recommendation or a submission error
pub fn interpret_reply(reply: HttpReply) -> Result<RecommendationResult, SubmissionError> {
    if reply.is_success() {
        return serde_json::from_str::<RecommendationResult>(&reply.body).map_err(|e| {
            tracing::warn!("Unreadable recommendation body: {}", e);
            SubmissionError::InvalidResponse
        });
    }

    if reply.status == 401 {
        tracing::debug!("prediction service requires login");
        return Err(SubmissionError::Unauthorized);
    }

    if !reply.is_json() {
        tracing::warn!(status = reply.status, "non-JSON error response");
        return Err(SubmissionError::InvalidResponse);
    }

    match serde_json::from_str::<PredictErrorBody>(&reply.body) {
        Ok(body) => {
            let message = body
                .error
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            tracing::warn!(status = reply.status, "prediction failed: {}", message);
            Err(SubmissionError::Server(message))
        }
        Err(e) => {
            tracing::warn!(status = reply.status, "unreadable error body: {}", e);
            Err(SubmissionError::InvalidResponse)
        }
    }
}

/// Apply enrichment when enabled
pub fn present(
    result: &RecommendationResult,
    sample: &SoilSample,
    options: SubmissionOptions,
) -> RecommendationResult {
    match sample.nutrients() {
        Some(levels) if options.enrich => enrichment::enrich(result, &levels),
        _ => result.clone(),
    }
}
