//! Prediction service HTTP client.

use std::time::Duration;

use flora_models::{ImageUpload, Prediction};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::{PredictError, PredictResult};
use crate::types::PredictResponse;

/// Multipart field name the service expects the image under.
pub const IMAGE_FIELD: &str = "image";

/// Configuration for the prediction client.
#[derive(Debug, Clone)]
pub struct PredictClientConfig {
    /// Base URL of the prediction service.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for PredictClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl PredictClientConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("PREDICT_SERVICE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string()),
            timeout: Duration::from_secs(
                std::env::var("PREDICT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }
}

/// Client for the plant prediction service.
pub struct PredictClient {
    http: Client,
    config: PredictClientConfig,
}

impl PredictClient {
    /// Create a new prediction client.
    pub fn new(config: PredictClientConfig) -> PredictResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(PredictError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> PredictResult<Self> {
        Self::new(PredictClientConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Classify an uploaded image.
    ///
    /// Issues exactly one multipart POST, no retry; the caller decides what
    /// a failed submission means.
    pub async fn predict(&self, upload: ImageUpload) -> PredictResult<Prediction> {
        let url = format!("{}/predict", self.config.base_url);

        debug!(
            file = %upload.file_name,
            bytes = upload.bytes.len(),
            "Sending predict request to {}", url
        );

        let mut part = Part::bytes(upload.bytes).file_name(upload.file_name);
        if let Some(mime) = upload.content_type {
            part = part.mime_str(&mime).map_err(PredictError::Network)?;
        }
        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PredictError::Timeout(self.config.timeout.as_secs())
                } else {
                    PredictError::Network(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Prediction service returned {}: {}", status, body);
            return Err(PredictError::Status { status, body });
        }

        let wire: PredictResponse = response
            .json()
            .await
            .map_err(|e| PredictError::InvalidResponse(e.to_string()))?;

        Ok(wire.into())
    }
}
