//! Aggregation engine.
//!
//! Every function here is pure: it takes rows that were already loaded and
//! returns freshly built values. Degenerate input (no rows, no orders) yields
//! zeros rather than errors.

pub mod orders;
pub mod products;

pub use orders::{
    order_kpis, orders_per_day, revenue_over_time, top_products_by_revenue, DailyOrders,
    DailyRevenue, OrderKpis, ProductSales,
};
pub use products::{
    basic_stats, product_series, revenue_by_product, top_n, BasicStats, Metric, ProductRevenue,
};
