//! Inventory aggregates over the products source.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::models::product::Product;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BasicStats {
    pub count: usize,
    pub total_quantity: u64,
    pub total_revenue: f64,
    /// 0.0 when there are no products.
    pub avg_price: f64,
    /// 0.0 when there are no products.
    pub avg_quantity: f64,
}

/// A product with its stock value (`price * quantity`) attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRevenue {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub revenue: f64,
}

impl From<&Product> for ProductRevenue {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity: product.quantity,
            revenue: product.revenue(),
        }
    }
}

/// Parallel label/value sequences in file order, ready for charting.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductSeries {
    pub labels: Vec<String>,
    pub quantities: Vec<u32>,
    pub prices: Vec<f64>,
}

/// Column a top-N ranking is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    Quantity,
    Price,
    #[default]
    Revenue,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Quantity, Metric::Price, Metric::Revenue];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Quantity => "quantity",
            Metric::Price => "price",
            Metric::Revenue => "revenue",
        }
    }

    pub fn value_of(&self, row: &ProductRevenue) -> f64 {
        match self {
            Metric::Quantity => f64::from(row.quantity),
            Metric::Price => row.price,
            Metric::Revenue => row.revenue,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quantity" => Ok(Metric::Quantity),
            "price" => Ok(Metric::Price),
            "revenue" => Ok(Metric::Revenue),
            other => Err(format!(
                "unknown metric '{other}', expected one of quantity, price, revenue"
            )),
        }
    }
}

pub fn basic_stats(products: &[Product]) -> BasicStats {
    let count = products.len();
    let total_quantity: u64 = products.iter().map(|p| u64::from(p.quantity)).sum();
    let total_revenue: f64 = products.iter().map(Product::revenue).sum();

    let (avg_price, avg_quantity) = if count == 0 {
        (0.0, 0.0)
    } else {
        let price_sum: f64 = products.iter().map(|p| p.price).sum();
        (price_sum / count as f64, total_quantity as f64 / count as f64)
    };

    BasicStats {
        count,
        total_quantity,
        total_revenue,
        avg_price,
        avg_quantity,
    }
}

pub fn product_series(products: &[Product]) -> ProductSeries {
    ProductSeries {
        labels: products.iter().map(|p| p.name.clone()).collect(),
        quantities: products.iter().map(|p| p.quantity).collect(),
        prices: products.iter().map(|p| p.price).collect(),
    }
}

/// Every product with its revenue, highest first. Equal revenues keep file order.
pub fn revenue_by_product(products: &[Product]) -> Vec<ProductRevenue> {
    rank(products, Metric::Revenue)
}

/// The `n` products with the largest `metric`. Ties keep file order.
pub fn top_n(products: &[Product], n: usize, metric: Metric) -> Vec<ProductRevenue> {
    let mut ranked = rank(products, metric);
    ranked.truncate(n);
    ranked
}

fn rank(products: &[Product], metric: Metric) -> Vec<ProductRevenue> {
    let mut rows: Vec<ProductRevenue> = products.iter().map(ProductRevenue::from).collect();
    // sort_by is stable; partial_cmp so that -0.0 and 0.0 tie
    rows.sort_by(|a, b| {
        metric
            .value_of(b)
            .partial_cmp(&metric.value_of(a))
            .unwrap_or(Ordering::Equal)
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64, quantity: u32) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            price,
            quantity,
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product("1", 10.0, 2),
            product("2", 5.0, 10),
            product("3", 20.0, 1),
            product("4", 2.5, 8),
            product("5", 50.0, 0),
        ]
    }

    #[test]
    fn basic_stats_example() {
        let products = vec![product("A", 10.0, 2), product("B", 5.0, 10)];
        let stats = basic_stats(&products);
        assert_eq!(
            stats,
            BasicStats {
                count: 2,
                total_quantity: 12,
                total_revenue: 70.0,
                avg_price: 7.5,
                avg_quantity: 6.0,
            }
        );
    }

    #[test]
    fn basic_stats_empty_averages_are_zero() {
        let stats = basic_stats(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.total_revenue, 0.0);
        assert_eq!(stats.avg_price, 0.0);
        assert_eq!(stats.avg_quantity, 0.0);
    }

    #[test]
    fn total_revenue_matches_independent_sum() {
        let products = sample();
        let mut expected = 0.0;
        for p in &products {
            expected += p.price * p.quantity as f64;
        }
        assert!((basic_stats(&products).total_revenue - expected).abs() < 1e-9);
    }

    #[test]
    fn revenue_by_product_sorted_for_every_rotation() {
        let base = sample();
        for shift in 0..base.len() {
            let mut rotated = base.clone();
            rotated.rotate_left(shift);
            let ranked = revenue_by_product(&rotated);
            assert_eq!(ranked.len(), base.len());
            assert!(ranked.windows(2).all(|w| w[0].revenue >= w[1].revenue));
        }
    }

    #[test]
    fn revenue_ties_keep_input_order() {
        // 4 * 5 == 2 * 10 == 20
        let products = vec![product("x", 4.0, 5), product("y", 2.0, 10), product("z", 1.0, 1)];
        let ids: Vec<_> = revenue_by_product(&products).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["x", "y", "z"]);
    }

    #[test]
    fn top_n_size_and_dominance() {
        let products = sample();
        for metric in Metric::ALL {
            for n in 0..=products.len() + 2 {
                let top = top_n(&products, n, metric);
                assert_eq!(top.len(), n.min(products.len()));

                let kept: Vec<&str> = top.iter().map(|r| r.id.as_str()).collect();
                let min_kept = top
                    .iter()
                    .map(|r| metric.value_of(r))
                    .fold(f64::INFINITY, f64::min);
                for excluded in products.iter().filter(|p| !kept.contains(&p.id.as_str())) {
                    let value = metric.value_of(&ProductRevenue::from(excluded));
                    assert!(min_kept >= value, "{metric} n={n}");
                }
            }
        }
    }

    #[test]
    fn top_n_by_quantity_breaks_ties_by_input_order() {
        let products = vec![product("a", 1.0, 3), product("b", 9.0, 7), product("c", 2.0, 7)];
        let ids: Vec<_> = top_n(&products, 2, Metric::Quantity)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, ["b", "c"]);
    }

    #[test]
    fn top_n_by_revenue_computes_revenue() {
        let top = top_n(&sample(), 1, Metric::Revenue);
        assert_eq!(top[0].id, "2");
        assert_eq!(top[0].revenue, 50.0);
    }

    #[test]
    fn metric_parsing() {
        assert_eq!("Revenue".parse::<Metric>(), Ok(Metric::Revenue));
        assert_eq!(" price ".parse::<Metric>(), Ok(Metric::Price));
        assert_eq!("quantity".parse::<Metric>(), Ok(Metric::Quantity));
        assert!("margin".parse::<Metric>().is_err());
    }

    #[test]
    fn series_in_file_order() {
        let series = product_series(&sample());
        assert_eq!(series.labels[0], "Product 1");
        assert_eq!(series.quantities, vec![2, 10, 1, 8, 0]);
        assert_eq!(series.prices, vec![10.0, 5.0, 20.0, 2.5, 50.0]);
    }

    #[test]
    fn negative_zero_ties_with_zero() {
        let products = vec![product("b", -0.0, 3), product("a", 0.0, 5)];

        let ids: Vec<String> = revenue_by_product(&products).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["b", "a"]);

        let top = top_n(&products, 1, Metric::Price);
        assert_eq!(top[0].id, "b");
    }
}
