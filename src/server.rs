//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api;
use crate::services::{EngineHandle, HandEngine, RenderService, Renderer};

/// Application state shared across all handlers.
///
/// The engine is constructed once here, before the listener binds, and is
/// read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<EngineHandle>,
    pub render_service: Arc<RenderService>,
    pub port: u16,
}

/// Create application state with the built-in engine.
pub fn create_app_state(port: u16) -> AppState {
    create_app_state_with_factory(port, HandEngine::load)
}

/// Create application state with a custom engine factory.
///
/// The factory runs exactly once; a failure is memoized on the handle and
/// every subsequent render fails without a retry.
pub fn create_app_state_with_factory<F>(port: u16, factory: F) -> AppState
where
    F: FnOnce() -> anyhow::Result<Arc<dyn Renderer>>,
{
    let engine = Arc::new(EngineHandle::initialize(factory));
    let render_service = Arc::new(RenderService::new(engine.clone()));

    AppState {
        engine,
        render_service,
        port,
    }
}

/// Build the API router with all endpoints and middleware.
///
/// The CORS layer answers browser preflights and stamps
/// `Access-Control-Allow-Origin: *` on every response, fallback included.
pub fn build_router(state: AppState) -> Router {
    // Per-route fallbacks replace axum's default 405 for unmatched methods:
    // the contract is 404 for any unknown (method, path) and 200 for OPTIONS.
    Router::new()
        .route("/", get(api::handle_index).fallback(handle_fallback))
        .route("/health", get(api::handle_health).fallback(handle_fallback))
        .route(
            "/generate",
            post(api::handle_generate).fallback(handle_fallback),
        )
        .fallback(handle_fallback)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
}

/// Unmatched (method, path) combinations.
///
/// Plain OPTIONS requests (no preflight headers, so the CORS layer passes
/// them through) still get 200 with an empty body; everything else is a
/// plain-text 404.
async fn handle_fallback(method: Method, uri: Uri) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    tracing::debug!(method = %method, path = %uri.path(), "No route matched");
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}
