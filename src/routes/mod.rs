use axum::{
    http::{header, Method, StatusCode},
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::middleware::{make_span_with_request_id, panic::panic_response, request_id_middleware};

pub mod recommendations;
pub mod state;

pub use state::AppState;

/// Creates the application router with all routes
///
/// Layers run outside-in: request id, CORS, tracing, then the panic guard
/// closest to the handlers.
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .route("/recommend", post(recommendations::recommend))
        .with_state(Arc::new(state));

    with_layers(router)
}

fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(cors_layer())
        .layer(middleware::from_fn(request_id_middleware))
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(Any)
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "healthy", "service": "recommendation-api" })),
    )
}
