// src/config.rs
use std::fmt::Debug;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::http::HeaderValue;

pub const DEFAULT_BASE_URL: &str = "https://api.langflow.astra.datastax.com";
pub const DEFAULT_LANGFLOW_ID: &str = "96f512a1-d07a-4283-9ecb-9478d59364d9";
pub const DEFAULT_ENDPOINT: &str = "quantify";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Process-wide settings, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub base_url: String,
    pub langflow_id: String,
    /// Flow id or the endpoint name configured on the flow.
    pub endpoint: String,
    /// Sent as-is; an empty token is left for the upstream to reject.
    pub application_token: String,
    pub cors_origins: Vec<HeaderValue>,
    pub addr: SocketAddr,
}

impl Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("langflow_id", &self.langflow_id)
            .field("endpoint", &self.endpoint)
            .field("application_token", &"<redacted>")
            .field("cors_origins", &self.cors_origins)
            .field("addr", &self.addr)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let port: u16 = var("PORT", "8000")
            .parse()
            .context("PORT must be a valid number")?;
        let addr = format!("{host}:{port}")
            .parse::<SocketAddr>()
            .with_context(|| format!("HOST must be an IP address, got {host:?}"))?;

        let cors_origins = var("CORS_ORIGINS", DEFAULT_CORS_ORIGIN)
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .with_context(|| format!("CORS_ORIGINS entry {origin:?} is not a valid header value"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            base_url: var("LANGFLOW_BASE_URL", DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            langflow_id: var("LANGFLOW_ID", DEFAULT_LANGFLOW_ID),
            endpoint: var("LANGFLOW_ENDPOINT", DEFAULT_ENDPOINT),
            application_token: lookup("APPLICATION_TOKEN").unwrap_or_default(),
            cors_origins,
            addr,
        })
    }

    /// `{base}/lf/{langflow_id}/api/v1/run/{endpoint}`
    pub fn run_url(&self) -> String {
        format!(
            "{}/lf/{}/api/v1/run/{}",
            self.base_url, self.langflow_id, self.endpoint
        )
    }
}
