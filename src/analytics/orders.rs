//! Sales aggregates over the orders and order-lines sources.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use crate::data::RowSet;
use crate::models::{order::Order, order_line::OrderLine};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyOrders {
    pub date: NaiveDate,
    pub orders: usize,
}

/// Sales of one product identity (id and name together) across all order lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSales {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u64,
    pub revenue: f64,
}

/// Headline sales figures shown on the dashboard and the orders page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderKpis {
    pub total_orders: usize,
    pub total_revenue: f64,
    pub total_quantity_sold: u64,
    pub avg_order_value: f64,
}

pub fn order_kpis(orders: &RowSet<Order>, lines: &[OrderLine]) -> OrderKpis {
    OrderKpis {
        total_orders: total_orders(orders),
        total_revenue: total_revenue(orders, lines),
        total_quantity_sold: total_quantity_sold(lines),
        avg_order_value: avg_order_value(orders, lines),
    }
}

pub fn total_orders(orders: &RowSet<Order>) -> usize {
    orders.len()
}

/// Sum of per-order totals when the orders file carries them, else sum of line subtotals.
pub fn total_revenue(orders: &RowSet<Order>, lines: &[OrderLine]) -> f64 {
    if orders.has_authoritative_total() {
        orders.rows().iter().filter_map(|o| o.total_amount).sum()
    } else {
        lines.iter().map(|l| l.subtotal).sum()
    }
}

pub fn total_quantity_sold(lines: &[OrderLine]) -> u64 {
    lines.iter().map(|l| u64::from(l.quantity)).sum()
}

/// Revenue per order; 0.0 when there are no orders.
pub fn avg_order_value(orders: &RowSet<Order>, lines: &[OrderLine]) -> f64 {
    let count = total_orders(orders);
    if count == 0 {
        return 0.0;
    }
    total_revenue(orders, lines) / count as f64
}

/// Revenue summed per order date, oldest first.
///
/// Uses the same precedence as [`total_revenue`]: order totals when present,
/// otherwise each order's line subtotals. Lines for unknown orders are ignored.
pub fn revenue_over_time(orders: &RowSet<Order>, lines: &[OrderLine]) -> Vec<DailyRevenue> {
    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    if orders.has_authoritative_total() {
        for order in orders.rows() {
            *by_date.entry(order.order_date).or_default() += order.total_amount.unwrap_or(0.0);
        }
    } else {
        let mut line_totals: HashMap<&str, f64> = HashMap::new();
        for line in lines {
            *line_totals.entry(line.order_id.as_str()).or_default() += line.subtotal;
        }
        for order in orders.rows() {
            let revenue = line_totals.get(order.order_id.as_str()).copied().unwrap_or(0.0);
            *by_date.entry(order.order_date).or_default() += revenue;
        }
    }

    by_date
        .into_iter()
        .map(|(date, revenue)| DailyRevenue { date, revenue })
        .collect()
}

/// Number of orders per order date, oldest first.
pub fn orders_per_day(orders: &[Order]) -> Vec<DailyOrders> {
    let mut by_date: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for order in orders {
        *by_date.entry(order.order_date).or_default() += 1;
    }
    by_date
        .into_iter()
        .map(|(date, orders)| DailyOrders { date, orders })
        .collect()
}

/// Best-selling products by summed subtotal. Equal revenues keep first-appearance order.
pub fn top_products_by_revenue(lines: &[OrderLine], n: usize) -> Vec<ProductSales> {
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut groups: Vec<ProductSales> = Vec::new();

    for line in lines {
        let key = (line.product_id.as_str(), line.product_name.as_str());
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(ProductSales {
                product_id: line.product_id.clone(),
                product_name: line.product_name.clone(),
                quantity: 0,
                revenue: 0.0,
            });
            groups.len() - 1
        });
        groups[slot].quantity += u64::from(line.quantity);
        groups[slot].revenue += line.subtotal;
    }

    groups.sort_by(|a, b| b.revenue.partial_cmp(&a.revenue).unwrap_or(Ordering::Equal));
    groups.truncate(n);
    groups
}
