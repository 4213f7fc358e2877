// src/dtos/report.rs
use serde::{Deserialize, Serialize};

use crate::analytics::{BasicStats, DailyOrders, DailyRevenue, OrderKpis, ProductSales};

/// Query string of `GET /top`. Values arrive raw so bad input can be reported on the page.
#[derive(Debug, Default, Deserialize)]
pub struct TopQuery {
    pub by: Option<String>,
    pub n: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub inventory: BasicStats,
    pub sales: OrderKpis,
    pub revenue_over_time: Vec<DailyRevenue>,
    pub orders_per_day: Vec<DailyOrders>,
    pub top_products: Vec<ProductSales>,
}
