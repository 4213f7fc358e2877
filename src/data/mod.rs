//! Flat-file loading: CSV sources into typed row sets.

pub mod dates;
pub mod error;
pub mod loader;

pub use error::DataError;
pub use loader::{load_order_lines, load_orders, load_products, RowSet};
