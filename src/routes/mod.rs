pub mod api;
pub mod pages;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(pages::routes())
        .merge(api::routes())
}

/// The complete application: every route, request tracing and state.
pub fn app(state: AppState) -> Router {
    create_router()
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
