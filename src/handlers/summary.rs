// src/handlers/summary.rs
use axum::{extract::State, Json};
use tracing::instrument;

use super::load_blocking;
use crate::analytics::{
    basic_stats, order_kpis, orders_per_day, revenue_over_time, top_products_by_revenue,
};
use crate::data::{load_order_lines, load_orders, load_products};
use crate::dtos::report::SummaryResponse;
use crate::error::ApiError;
use crate::state::AppState;

// GET /api/summary - Every aggregate as JSON
#[instrument(skip(state))]
pub async fn get_summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, ApiError> {
    let sources = &state.config.sources;
    let products = load_blocking(&sources.products, load_products).await?;
    let orders = load_blocking(&sources.orders, load_orders).await?;
    let lines = load_blocking(&sources.order_items, load_order_lines).await?;

    Ok(Json(SummaryResponse {
        inventory: basic_stats(products.rows()),
        sales: order_kpis(&orders, lines.rows()),
        revenue_over_time: revenue_over_time(&orders, lines.rows()),
        orders_per_day: orders_per_day(orders.rows()),
        top_products: top_products_by_revenue(lines.rows(), state.config.top_n),
    }))
}
