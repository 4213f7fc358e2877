use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::data::dates::deserialize_date;
use crate::data::loader::{Record, RowSet};
use super::non_negative;

/// Header names accepted for the per-order total.
pub const TOTAL_COLUMNS: [&str; 2] = ["total_amount", "total"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub order_date: NaiveDate,
    #[serde(default, alias = "total")]
    pub total_amount: Option<f64>,
}

impl Record for Order {
    fn validate(&self, headers: &[String]) -> Result<(), String> {
        match self.total_amount {
            Some(total) => non_negative("total_amount", total),
            None if headers.iter().any(|h| TOTAL_COLUMNS.contains(&h.as_str())) => {
                Err("total_amount is blank".to_string())
            }
            None => Ok(()),
        }
    }
}

impl RowSet<Order> {
    /// True when the source file carries a per-order total column.
    pub fn has_authoritative_total(&self) -> bool {
        TOTAL_COLUMNS.iter().any(|c| self.has_column(c))
    }
}
