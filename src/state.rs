// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::flow_client::FlowClient;

pub type SharedState = Arc<AppState>;

#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub flow: FlowClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let flow = FlowClient::new(&config);
        Self { config, flow }
    }
}
