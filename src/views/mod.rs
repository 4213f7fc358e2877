//! Server-rendered HTML: shared page shell, reusable fragments and the pages themselves.

pub mod components;
pub mod pages;

use std::fmt::Write;

use crate::charts::PLOTLY_CDN;

/// Top navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Dashboard,
    Products,
    Orders,
    Top,
    None,
}

const NAV_LINKS: [(Nav, &str, &str); 4] = [
    (Nav::Dashboard, "/dashboard", "Dashboard"),
    (Nav::Products, "/products", "Products"),
    (Nav::Orders, "/orders", "Orders"),
    (Nav::Top, "/top", "Top products"),
];

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#f5f6fa;color:#222}\
nav{background:#2f3640;padding:0 1.5rem}\
nav a{display:inline-block;color:#dcdde1;padding:.9rem 1rem;text-decoration:none}\
nav a.active{color:#fff;border-bottom:3px solid #00a8ff}\
main{padding:1.5rem}\
.cards{display:flex;flex-wrap:wrap;gap:1rem;margin-bottom:1.5rem}\
.card{background:#fff;border-radius:8px;padding:1rem 1.25rem;min-width:10rem;box-shadow:0 1px 3px #0002}\
.card .label{font-size:.85rem;color:#718093}\
.card .value{font-size:1.5rem;font-weight:600}\
.chart{background:#fff;border-radius:8px;margin-bottom:1.5rem}\
table{border-collapse:collapse;background:#fff;width:100%;margin-bottom:1.5rem}\
th,td{padding:.5rem .75rem;border-bottom:1px solid #dcdde1;text-align:left}\
td.num,th.num{text-align:right}\
.error{background:#fff;border-left:4px solid #e84118;padding:1rem 1.25rem}";

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Two decimals with thousands separators, e.g. `1,234.50`.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac}")
}

/// Wraps `body` in the document shell with navigation and the Plotly script.
pub fn layout(title: &str, active: Nav, body: &str) -> String {
    let mut nav = String::new();
    for (entry, href, label) in NAV_LINKS {
        let class = if entry == active { " class=\"active\"" } else { "" };
        let _ = write!(nav, "<a href=\"{href}\"{class}>{label}</a>");
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} | SalesBoard</title>\n\
         <script src=\"{PLOTLY_CDN}\"></script>\n\
         <style>{STYLE}</style>\n\
         </head>\n<body>\n<nav>{nav}</nav>\n<main>\n<h1>{title}</h1>\n{body}</main>\n</body>\n</html>\n",
        title = escape(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("<a href=\"x\">Tom & Jerry's</a>"), "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn amounts_are_grouped() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(70.0), "70.00");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-1500.0), "-1,500.00");
    }

    #[test]
    fn layout_marks_active_tab() {
        let html = layout("Orders", Nav::Orders, "<p>body</p>");
        assert!(html.contains("<a href=\"/orders\" class=\"active\">Orders</a>"));
        assert!(html.contains("<a href=\"/dashboard\">Dashboard</a>"));
        assert!(html.contains(PLOTLY_CDN));
        assert!(html.contains("<p>body</p>"));
    }
}
