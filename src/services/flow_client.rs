// src/services/flow_client.rs
use reqwest::StatusCode;
use serde_json::value::RawValue;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::message::FlowPayload;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Error: {}, {body}", .status.as_u16())]
    Upstream { status: StatusCode, body: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("invalid JSON in upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Runs the configured Langflow flow. One HTTP call per `run_flow`, no retries.
#[derive(Clone)]
pub struct FlowClient {
    http: reqwest::Client,
    run_url: String,
    token: String,
}

impl std::fmt::Debug for FlowClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowClient")
            .field("run_url", &self.run_url)
            .finish()
    }
}

impl FlowClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            run_url: config.run_url(),
            token: config.application_token.clone(),
        }
    }

    #[instrument(skip_all, fields(url = %self.run_url))]
    pub async fn run_flow(&self, message: &str) -> Result<Box<RawValue>, FlowError> {
        let response = self
            .http
            .post(&self.run_url)
            .bearer_auth(&self.token)
            .json(&FlowPayload::chat(message))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "flow responded");

        if !status.is_success() {
            return Err(FlowError::Upstream { status, body });
        }

        // Relayed as received, only validated.
        Ok(RawValue::from_string(body)?)
    }
}
