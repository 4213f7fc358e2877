use axum::{routing::get, Router};
use crate::handlers::summary::get_summary;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/summary", get(get_summary))
}
