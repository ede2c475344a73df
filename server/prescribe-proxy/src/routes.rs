use crate::handlers::{health, patients, prescriptions};
use crate::state::ProxyState;
use axum::{
    routing::{get, post},
    Router,
};

/// Create health check routes
pub fn health_routes() -> Router<ProxyState> {
    Router::new().route("/health", get(health::health_check))
}

/// Create the REST endpoints that proxy into the MCP tools
pub fn api_routes() -> Router<ProxyState> {
    Router::new()
        .route("/api/patients", get(patients::list_patients))
        .route("/api/patients/:id", get(patients::get_patient))
        .route(
            "/api/generate_prescription",
            post(prescriptions::generate_prescription),
        )
        .route("/api/history", get(prescriptions::prescription_history))
}

/// Assemble all route groups
pub fn create_routes() -> Router<ProxyState> {
    health_routes().merge(api_routes())
}
