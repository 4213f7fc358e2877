use serde::{Deserialize, Serialize};

use crate::data::loader::Record;
use super::non_negative;

/// One inventory line: what is on hand and at what unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    pub fn revenue(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

impl Record for Product {
    fn validate(&self, _headers: &[String]) -> Result<(), String> {
        non_negative("price", self.price)
    }
}
