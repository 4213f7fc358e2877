//! Plotly figures built server-side and embedded into pages.
//!
//! A [`Chart`] is only data: a trace list and a layout as JSON. Rendering
//! produces a container `<div>` plus the `Plotly.newPlot` call; the page
//! layout is responsible for loading the Plotly script once.

use serde_json::{json, Value};

use crate::analytics::ProductRevenue;

pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const TEMPLATE: &str = "plotly_white";
const CHART_HEIGHT: u32 = 400;

#[derive(Debug, Clone)]
pub struct Chart {
    id: String,
    data: Value,
    layout: Value,
}

impl Chart {
    pub fn new(id: impl Into<String>, data: Value, layout: Value) -> Self {
        Self { id: id.into(), data, layout }
    }

    pub fn render(&self) -> String {
        let id = crate::views::escape(&self.id);
        format!(
            "<div id=\"{id}\" class=\"chart\"></div>\n\
             <script>Plotly.newPlot(\"{id}\", {data}, {layout}, {{\"responsive\": true}});</script>\n",
            data = script_json(&self.data),
            layout = script_json(&self.layout),
        )
    }
}

/// JSON that is safe inside a `<script>` element.
fn script_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

/// Bars coloured by value on the Viridis scale, with the value printed on each bar.
pub fn bar_chart(
    id: &str,
    title: &str,
    labels: &[String],
    values: &[f64],
    x_title: &str,
    y_title: &str,
) -> Chart {
    let data = json!([{
        "type": "bar",
        "x": labels,
        "y": values,
        "marker": { "color": values, "colorscale": "Viridis", "showscale": true },
        "text": values,
        "textposition": "auto",
    }]);
    let layout = json!({
        "title": { "text": title },
        "xaxis": { "title": { "text": x_title } },
        "yaxis": { "title": { "text": y_title } },
        "template": TEMPLATE,
        "height": CHART_HEIGHT,
        "hovermode": "x unified",
    });
    Chart::new(id, data, layout)
}

/// Donut chart showing each label's share.
pub fn pie_chart(id: &str, title: &str, labels: &[String], values: &[f64]) -> Chart {
    let data = json!([{
        "type": "pie",
        "labels": labels,
        "values": values,
        "hole": 0.4,
        "textinfo": "label+percent",
        "textposition": "auto",
    }]);
    let layout = json!({
        "title": { "text": title },
        "template": TEMPLATE,
        "height": CHART_HEIGHT,
    });
    Chart::new(id, data, layout)
}

pub fn line_chart(
    id: &str,
    title: &str,
    x: &[String],
    y: &[f64],
    x_title: &str,
    y_title: &str,
) -> Chart {
    let data = json!([{
        "type": "scatter",
        "x": x,
        "y": y,
        "mode": "lines+markers",
        "line": { "color": "royalblue", "width": 3 },
        "marker": { "size": 8 },
    }]);
    let layout = json!({
        "title": { "text": title },
        "xaxis": { "title": { "text": x_title } },
        "yaxis": { "title": { "text": y_title } },
        "template": TEMPLATE,
        "height": CHART_HEIGHT,
    });
    Chart::new(id, data, layout)
}

/// 2x2 grid: quantity, price and revenue bars plus a revenue pie.
pub fn product_overview(id: &str, rows: &[ProductRevenue]) -> Chart {
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    let quantities: Vec<u32> = rows.iter().map(|r| r.quantity).collect();
    let prices: Vec<f64> = rows.iter().map(|r| r.price).collect();
    let revenues: Vec<f64> = rows.iter().map(|r| r.revenue).collect();

    let data = json!([
        { "type": "bar", "x": names, "y": quantities, "name": "Quantity",
          "marker": { "color": "lightblue" }, "xaxis": "x", "yaxis": "y" },
        { "type": "bar", "x": names, "y": prices, "name": "Price",
          "marker": { "color": "lightgreen" }, "xaxis": "x2", "yaxis": "y2" },
        { "type": "bar", "x": names, "y": revenues, "name": "Revenue",
          "marker": { "color": "coral" }, "xaxis": "x3", "yaxis": "y3" },
        { "type": "pie", "labels": names, "values": revenues, "name": "Revenue",
          "domain": { "row": 1, "column": 1 } },
    ]);

    let subplot_title = |text: &str, x: f64, y: f64| {
        json!({ "text": text, "x": x, "y": y, "xref": "paper", "yref": "paper",
                "xanchor": "center", "yanchor": "bottom", "showarrow": false })
    };
    let layout = json!({
        "grid": { "rows": 2, "columns": 2, "pattern": "independent" },
        "annotations": [
            subplot_title("Quantity in stock", 0.225, 1.0),
            subplot_title("Unit price", 0.775, 1.0),
            subplot_title("Revenue by product", 0.225, 0.45),
            subplot_title("Revenue share", 0.775, 0.45),
        ],
        "height": CHART_HEIGHT * 2,
        "showlegend": false,
        "template": TEMPLATE,
    });
    Chart::new(id, data, layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bar_chart_carries_values_and_titles() {
        let chart = bar_chart("qty", "Stock", &labels(&["A", "B"]), &[2.0, 10.0], "Product", "Units");
        let html = chart.render();
        assert!(html.contains("<div id=\"qty\""));
        assert!(html.contains("Plotly.newPlot(\"qty\""));
        assert!(html.contains("\"Viridis\""));
        assert!(html.contains("[2.0,10.0]"));
        assert!(html.contains("\"Units\""));
    }

    #[test]
    fn pie_chart_is_a_donut() {
        let chart = pie_chart("share", "Share", &labels(&["A"]), &[1.0]);
        assert_eq!(chart.data[0]["hole"], json!(0.4));
        assert_eq!(chart.data[0]["textinfo"], json!("label+percent"));
    }

    #[test]
    fn line_chart_uses_markers() {
        let chart = line_chart("rev", "Revenue", &labels(&["2024-01-01"]), &[150.0], "Date", "Revenue");
        assert_eq!(chart.data[0]["mode"], json!("lines+markers"));
        assert_eq!(chart.data[0]["x"], json!(["2024-01-01"]));
    }

    #[test]
    fn overview_has_four_traces() {
        let rows = vec![ProductRevenue {
            id: "1".into(),
            name: "A".into(),
            price: 10.0,
            quantity: 2,
            revenue: 20.0,
        }];
        let chart = product_overview("overview", &rows);
        assert_eq!(chart.data.as_array().map(Vec::len), Some(4));
        assert_eq!(chart.data[3]["type"], json!("pie"));
        assert_eq!(chart.layout["height"], json!(800));
    }

    #[test]
    fn labels_cannot_close_the_script_tag() {
        let chart = bar_chart("x", "t", &labels(&["</script><b>"]), &[1.0], "", "");
        let html = chart.render();
        assert!(!html.contains("</script><b>"));
        assert!(html.contains("<\\/script><b>"));
    }
}
