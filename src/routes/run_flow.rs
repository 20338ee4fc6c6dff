use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::value::RawValue;

use crate::{error::AppError, message::RunFlowRequest, state::SharedState};

pub async fn run_flow_handler(
    State(state): State<SharedState>,
    payload: Result<Json<RunFlowRequest>, JsonRejection>,
) -> Result<Json<Box<RawValue>>, AppError> {
    let Json(payload) = payload?;

    if payload.message.trim().is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    }

    // Forwarded untrimmed.
    let response = state.flow.run_flow(&payload.message).await?;
    Ok(Json(response))
}
