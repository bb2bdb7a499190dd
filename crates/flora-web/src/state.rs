//! Application state.

use std::sync::Arc;

use flora_ml_client::{PredictClient, PredictError};

use crate::config::WebConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: WebConfig,
    pub predictor: Arc<PredictClient>,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: WebConfig, predictor: PredictClient) -> Self {
        Self {
            config,
            predictor: Arc::new(predictor),
        }
    }

    /// State wired to the environment-configured prediction service.
    pub fn from_env() -> Result<Self, PredictError> {
        Ok(Self::new(WebConfig::from_env(), PredictClient::from_env()?))
    }
}
