//! Retailer-independent product record.

use serde::{Deserialize, Serialize};

/// A catalog item normalized away from any provider's wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product name as shown by the retailer
    pub name: String,
    /// Category label the product was requested under
    pub category: String,
    /// Provider price, passed through without unit conversion
    pub price: f64,
    /// Absolute link to the product page
    pub link: String,
}

impl Product {
    /// Price truncated towards zero, as printed in text output.
    pub fn whole_price(&self) -> i64 {
        self.price.trunc() as i64
    }
}
