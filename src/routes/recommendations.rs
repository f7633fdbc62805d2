use axum::{body::Bytes, extract::State, Extension, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{RecommendationRequest, RecommendationResponse},
    routes::AppState,
    services::TracingObserver,
};

/// Handler for the recommendation endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    body: Bytes,
) -> AppResult<Json<RecommendationResponse>> {
    let request = parse_request(&body).map_err(|e| {
        tracing::warn!(request_id = %request_id, error = %e, "Rejected recommendation request");
        e
    })?;

    let input = request.validate().map_err(|e| {
        tracing::warn!(
            request_id = %request_id,
            index = e.index(),
            field = e.field(),
            error = %e,
            "Invalid activity record"
        );
        AppError::from(e)
    })?;

    let observer = TracingObserver::new(request_id.to_string());
    let response = state.recommender.recommend(&input, &observer);

    Ok(Json(response))
}

/// Decodes the request body, rejecting anything that is not a JSON object
fn parse_request(body: &[u8]) -> AppResult<RecommendationRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::no_data());
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::InvalidRequest(format!("body is not valid JSON: {}", e)))?;

    match value {
        Value::Null => Err(AppError::no_data()),
        Value::Object(_) => serde_json::from_value(value)
            .map_err(|e| AppError::InvalidRequest(e.to_string())),
        _ => Err(AppError::InvalidRequest(
            "expected a JSON object".to_string(),
        )),
    }
}
