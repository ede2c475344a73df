//! Prescribe Proxy - REST facade over the MCP prescription tools
//!
//! Maps four HTTP routes onto the four tool calls and keeps nothing else:
//! all validation, orchestration, and error classification happen behind the
//! tool contract, and this crate only translates envelopes into HTTP.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{api_success, ApiError, ApiResponse};
pub use state::{ProxyConfig, ProxyState};

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main application router with all routes and middleware
pub fn create_app(state: ProxyState) -> Router {
    routes::create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer()),
        )
        .with_state(state)
}

/// Permissive CORS, matching the original browser-facing deployment
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
