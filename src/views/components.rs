use std::fmt::Write;

use super::{escape, format_amount};
use crate::analytics::{BasicStats, OrderKpis, ProductRevenue, ProductSales};

/// One KPI tile: label and already-formatted value.
pub struct Card {
    pub label: &'static str,
    pub value: String,
}

impl Card {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self { label, value: value.into() }
    }
}

pub fn cards(cards: &[Card]) -> String {
    let mut html = String::from("<section class=\"cards\">\n");
    for card in cards {
        let _ = writeln!(
            html,
            "<div class=\"card\"><div class=\"label\">{}</div><div class=\"value\">{}</div></div>",
            escape(card.label),
            escape(&card.value),
        );
    }
    html.push_str("</section>\n");
    html
}

pub fn stock_cards(stats: &BasicStats) -> Vec<Card> {
    vec![
        Card::new("Products", stats.count.to_string()),
        Card::new("Units in stock", stats.total_quantity.to_string()),
        Card::new("Stock value", format_amount(stats.total_revenue)),
        Card::new("Average price", format_amount(stats.avg_price)),
        Card::new("Average quantity", format!("{:.1}", stats.avg_quantity)),
    ]
}

pub fn sales_cards(kpis: &OrderKpis) -> Vec<Card> {
    vec![
        Card::new("Orders", kpis.total_orders.to_string()),
        Card::new("Revenue", format_amount(kpis.total_revenue)),
        Card::new("Units sold", kpis.total_quantity_sold.to_string()),
        Card::new("Average order value", format_amount(kpis.avg_order_value)),
    ]
}

pub fn product_table(rows: &[ProductRevenue]) -> String {
    let mut html = String::from(
        "<table>\n<thead><tr><th>#</th><th>ID</th><th>Name</th>\
         <th class=\"num\">Price</th><th class=\"num\">Quantity</th><th class=\"num\">Revenue</th>\
         </tr></thead>\n<tbody>\n",
    );
    for (rank, row) in rows.iter().enumerate() {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"num\">{}</td>\
             <td class=\"num\">{}</td><td class=\"num\">{}</td></tr>",
            rank + 1,
            escape(&row.id),
            escape(&row.name),
            format_amount(row.price),
            row.quantity,
            format_amount(row.revenue),
        );
    }
    if rows.is_empty() {
        html.push_str("<tr><td colspan=\"6\">No products</td></tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
    html
}

pub fn sales_table(rows: &[ProductSales]) -> String {
    let mut html = String::from(
        "<table>\n<thead><tr><th>#</th><th>ID</th><th>Name</th>\
         <th class=\"num\">Units sold</th><th class=\"num\">Revenue</th></tr></thead>\n<tbody>\n",
    );
    for (rank, row) in rows.iter().enumerate() {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>",
            rank + 1,
            escape(&row.product_id),
            escape(&row.product_name),
            row.quantity,
            format_amount(row.revenue),
        );
    }
    if rows.is_empty() {
        html.push_str("<tr><td colspan=\"5\">No sales</td></tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
    html
}
