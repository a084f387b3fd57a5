//! Capability every supported retailer implements.

use crate::error::Result;
use crate::models::Product;
use async_trait::async_trait;

/// Number of items requested when the caller gives no limit.
pub const DEFAULT_LIMIT: u32 = 100;

/// Fetches a category's products from one retailer - enables mocking for tests.
#[async_trait]
pub trait Retailer: Send + Sync {
    /// Short retailer name for logs.
    fn name(&self) -> &'static str;

    /// Returns up to `limit` products (default [`DEFAULT_LIMIT`]) of the category
    /// best matching `category`.
    async fn parse_category(&self, category: &str, limit: Option<u32>) -> Result<Vec<Product>>;
}
