use serde::{Deserialize, Serialize};

use crate::data::loader::Record;
use super::non_negative;

/// One product line of an order. `subtotal` is the price paid at the time of sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub order_id: String,
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub subtotal: f64,
}

impl Record for OrderLine {
    fn validate(&self, _headers: &[String]) -> Result<(), String> {
        non_negative("subtotal", self.subtotal)
    }
}
