//! Router and request handlers.

use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::adapter;
use bluff_types::{SimulateRequest, SimulateResponse};

/// Builds the service router. The game server and web client run on other
/// ports during development, so CORS stays permissive.
pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/simulate", post(simulate))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[derive(Serialize)]
struct LivenessResponse {
    message: &'static str,
}

async fn root() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: "Quantum Bluff - Simulation Server is running!",
    })
}

async fn simulate(Json(request): Json<SimulateRequest>) -> Json<SimulateResponse> {
    tracing::debug!(
        gate = %request.gate,
        initial_state = ?request.initial_state,
        "simulation request"
    );
    let final_state = adapter::apply_gate(request.initial_state.as_deref(), &request.gate);
    Json(SimulateResponse { final_state })
}
