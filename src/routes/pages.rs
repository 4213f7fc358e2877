use axum::{routing::get, Router};
use crate::handlers::pages::{dashboard, index, orders, products, top_products};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/dashboard", get(dashboard))
        .route("/products", get(products))
        .route("/orders", get(orders))
        .route("/top", get(top_products))
}
