// src/handlers/pages.rs
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
};
use tracing::{debug, instrument};

use super::load_blocking;
use crate::analytics::{
    basic_stats, order_kpis, orders_per_day, product_series, revenue_by_product,
    revenue_over_time, top_n, top_products_by_revenue, DailyOrders, DailyRevenue, Metric,
    ProductSales,
};
use crate::charts::{self, Chart};
use crate::data::{load_order_lines, load_orders, load_products};
use crate::dtos::report::TopQuery;
use crate::error::AppError;
use crate::state::AppState;
use crate::views::pages;

// GET / - Redirect to the dashboard
pub async fn index() -> Redirect {
    Redirect::to("/dashboard")
}

// GET /dashboard - Sales and inventory overview
#[instrument(skip(state))]
pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let sources = &state.config.sources;
    let products = load_blocking(&sources.products, load_products).await?;
    let orders = load_blocking(&sources.orders, load_orders).await?;
    let lines = load_blocking(&sources.order_items, load_order_lines).await?;
    debug!(
        products = products.len(),
        orders = orders.len(),
        lines = lines.len(),
        "Building dashboard"
    );

    let stats = basic_stats(products.rows());
    let kpis = order_kpis(&orders, lines.rows());
    let daily = revenue_over_time(&orders, lines.rows());
    let top = top_products_by_revenue(lines.rows(), state.config.top_n);

    let charts = [revenue_trend("revenue-trend", &daily), best_sellers("best-sellers", &top)];
    Ok(Html(pages::dashboard(&stats, &kpis, &charts, &top)))
}

// GET /products - Inventory stats and charts
#[instrument(skip(state))]
pub async fn products(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let products = load_blocking(&state.config.sources.products, load_products).await?;
    debug!(products = products.len(), "Building products page");

    let stats = basic_stats(products.rows());
    let series = product_series(products.rows());
    let by_revenue = revenue_by_product(products.rows());

    let quantities: Vec<f64> = series.quantities.iter().map(|&q| f64::from(q)).collect();
    // pie follows file order so slices line up with the stock chart
    let revenues: Vec<f64> = products.rows().iter().map(|p| p.revenue()).collect();

    let charts = [
        charts::bar_chart(
            "stock",
            "Units in stock",
            &series.labels,
            &quantities,
            "Product",
            "Quantity",
        ),
        charts::pie_chart("revenue-share", "Revenue share by product", &series.labels, &revenues),
        charts::product_overview("overview", &by_revenue),
    ];
    Ok(Html(pages::products(&stats, &charts, &by_revenue)))
}

// GET /orders - Sales KPIs and time series
#[instrument(skip(state))]
pub async fn orders(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let sources = &state.config.sources;
    let orders = load_blocking(&sources.orders, load_orders).await?;
    let lines = load_blocking(&sources.order_items, load_order_lines).await?;
    debug!(orders = orders.len(), lines = lines.len(), "Building orders page");

    let kpis = order_kpis(&orders, lines.rows());
    let daily_revenue = revenue_over_time(&orders, lines.rows());
    let daily_orders = orders_per_day(orders.rows());
    let top = top_products_by_revenue(lines.rows(), state.config.top_n);

    let charts = [
        revenue_trend("revenue-trend", &daily_revenue),
        order_volume("order-volume", &daily_orders),
        best_sellers("best-sellers", &top),
    ];
    Ok(Html(pages::orders(&kpis, &charts, &top)))
}

// GET /top?by=revenue&n=5 - Top-N products by a chosen metric
#[instrument(skip(state))]
pub async fn top_products(
    State(state): State<AppState>,
    Query(query): Query<TopQuery>,
) -> Result<Html<String>, AppError> {
    let metric = match query.by.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => raw.parse::<Metric>().map_err(AppError::validation)?,
        None => Metric::default(),
    };
    let n = match query.n.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| AppError::validation(format!("n must be a non-negative integer, got '{raw}'")))?,
        None => state.config.top_n,
    };

    let products = load_blocking(&state.config.sources.products, load_products).await?;
    let rows = top_n(products.rows(), n, metric);
    Ok(Html(pages::top_products(metric, n, &rows)))
}

fn revenue_trend(id: &str, daily: &[DailyRevenue]) -> Chart {
    let dates: Vec<String> = daily.iter().map(|d| d.date.to_string()).collect();
    let revenue: Vec<f64> = daily.iter().map(|d| d.revenue).collect();
    charts::line_chart(id, "Revenue over time", &dates, &revenue, "Date", "Revenue")
}

fn order_volume(id: &str, daily: &[DailyOrders]) -> Chart {
    let dates: Vec<String> = daily.iter().map(|d| d.date.to_string()).collect();
    let counts: Vec<f64> = daily.iter().map(|d| d.orders as f64).collect();
    charts::bar_chart(id, "Orders per day", &dates, &counts, "Date", "Orders")
}

fn best_sellers(id: &str, top: &[ProductSales]) -> Chart {
    let names: Vec<String> = top.iter().map(|p| p.product_name.clone()).collect();
    let revenue: Vec<f64> = top.iter().map(|p| p.revenue).collect();
    charts::bar_chart(id, "Top products by revenue", &names, &revenue, "Product", "Revenue")
}
