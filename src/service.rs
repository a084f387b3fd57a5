//! Retailer-agnostic entry point.

use crate::error::Result;
use crate::models::Product;
use crate::retailer::Retailer;

/// Forwards parse requests to the configured retailer.
pub struct ParserService<R> {
    retailer: R,
}

impl<R: Retailer> ParserService<R> {
    pub fn new(retailer: R) -> Self {
        Self { retailer }
    }

    /// Parses `category` with the underlying retailer.
    pub async fn parse(&self, category: &str, limit: Option<u32>) -> Result<Vec<Product>> {
        self.retailer.parse_category(category, limit).await
    }

    pub fn retailer(&self) -> &R {
        &self.retailer
    }
}
