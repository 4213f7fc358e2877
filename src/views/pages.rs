use std::fmt::Write;

use http::StatusCode;

use super::components::{cards, product_table, sales_cards, sales_table, stock_cards};
use super::{escape, layout, Nav};
use crate::analytics::{BasicStats, Metric, OrderKpis, ProductRevenue, ProductSales};
use crate::charts::Chart;

fn render_charts(charts: &[Chart]) -> String {
    charts.iter().map(Chart::render).collect()
}

pub fn dashboard(
    stats: &BasicStats,
    kpis: &OrderKpis,
    charts: &[Chart],
    top_sales: &[ProductSales],
) -> String {
    let mut body = String::new();
    body.push_str("<h2>Sales</h2>\n");
    body.push_str(&cards(&sales_cards(kpis)));
    body.push_str("<h2>Inventory</h2>\n");
    body.push_str(&cards(&stock_cards(stats)));
    body.push_str(&render_charts(charts));
    body.push_str("<h2>Best sellers</h2>\n");
    body.push_str(&sales_table(top_sales));
    layout("Dashboard", Nav::Dashboard, &body)
}

pub fn products(stats: &BasicStats, charts: &[Chart], rows: &[ProductRevenue]) -> String {
    let mut body = cards(&stock_cards(stats));
    body.push_str(&render_charts(charts));
    body.push_str("<h2>Revenue by product</h2>\n");
    body.push_str(&product_table(rows));
    layout("Products", Nav::Products, &body)
}

pub fn orders(kpis: &OrderKpis, charts: &[Chart], top_sales: &[ProductSales]) -> String {
    let mut body = cards(&sales_cards(kpis));
    body.push_str(&render_charts(charts));
    body.push_str("<h2>Top products by revenue</h2>\n");
    body.push_str(&sales_table(top_sales));
    layout("Orders", Nav::Orders, &body)
}

/// Ranking page with a small form to switch metric and size.
pub fn top_products(metric: Metric, n: usize, rows: &[ProductRevenue]) -> String {
    let mut options = String::new();
    for candidate in Metric::ALL {
        let selected = if candidate == metric { " selected" } else { "" };
        let _ = write!(options, "<option value=\"{candidate}\"{selected}>{candidate}</option>");
    }

    let body = format!(
        "<form method=\"get\" action=\"/top\">\n\
         <label>By <select name=\"by\">{options}</select></label>\n\
         <label>N <input type=\"number\" name=\"n\" min=\"0\" value=\"{n}\"></label>\n\
         <button type=\"submit\">Show</button>\n</form>\n\
         <h2>Top {n} by {metric}</h2>\n{table}",
        table = product_table(rows),
    );
    layout("Top products", Nav::Top, &body)
}

pub fn error(status: StatusCode, message: &str) -> String {
    let title = if status == StatusCode::NOT_FOUND {
        "Missing data"
    } else {
        "Something went wrong"
    };
    let body = format!(
        "<div class=\"error\"><p><strong>{}</strong></p><p>{}</p></div>\n",
        status,
        escape(message),
    );
    layout(title, Nav::None, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_page_titles_by_status() {
        let missing = error(StatusCode::NOT_FOUND, "data file not found: products.csv");
        assert!(missing.contains("<h1>Missing data</h1>"));
        assert!(missing.contains("products.csv"));

        let broken = error(StatusCode::INTERNAL_SERVER_ERROR, "bad <row>");
        assert!(broken.contains("<h1>Something went wrong</h1>"));
        assert!(broken.contains("bad &lt;row&gt;"));
    }

    #[test]
    fn top_page_selects_current_metric() {
        let html = top_products(Metric::Price, 3, &[]);
        assert!(html.contains("<option value=\"price\" selected>price</option>"));
        assert!(html.contains("<h2>Top 3 by price</h2>"));
        assert!(html.contains("class=\"active\">Top products</a>"));
    }
}
