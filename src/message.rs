// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RunFlowRequest {
    pub message: String,
}

/// Body sent to the Langflow run endpoint.
#[derive(Debug, Serialize)]
pub struct FlowPayload<'a> {
    pub input_value: &'a str,
    pub output_type: &'static str,
    pub input_type: &'static str,
}

impl<'a> FlowPayload<'a> {
    pub fn chat(message: &'a str) -> Self {
        Self {
            input_value: message,
            output_type: "chat",
            input_type: "chat",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
