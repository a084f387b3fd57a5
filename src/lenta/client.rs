//! Lenta catalog client: category lookup, item fetch and mapping.

use super::categories::find_category_id;
use super::mapper::map_items;
use super::models::{CategoriesResponse, Filter, ItemsResponse, RawItem};
use super::transport::{LentaTransport, TransportConfig};
use crate::error::{Error, Result};
use crate::models::Product;
use crate::retailer::{Retailer, DEFAULT_LIMIT};
use async_trait::async_trait;
use tracing::{debug, info};
use wreq::Method;

/// Default API origin.
pub const API_BASE: &str = "https://lenta.com";

const CATEGORIES_PATH: &str = "/api-gateway/v1/catalog/categories";
const ITEMS_PATH: &str = "/api-gateway/v1/catalog/items";

/// Client for the Lenta catalog gateway.
pub struct LentaClient {
    transport: LentaTransport,
    base_url: Option<String>,
}

impl LentaClient {
    /// Creates a client talking to the production gateway.
    pub fn new(config: &TransportConfig) -> Result<Self> {
        Self::with_base_url(config, None)
    }

    /// Creates a client with an optional custom API origin (for testing).
    pub fn with_base_url(config: &TransportConfig, base_url: Option<String>) -> Result<Self> {
        Ok(Self { transport: LentaTransport::new(config)?, base_url })
    }

    /// Returns the API origin (custom for testing, or the production gateway).
    fn base_url(&self) -> &str {
        self.base_url.as_deref().map(|url| url.trim_end_matches('/')).unwrap_or(API_BASE)
    }

    /// Resolves a category name to its catalog id.
    pub async fn resolve_category(&self, name: &str) -> Result<i64> {
        let url = format!("{}{}", self.base_url(), CATEGORIES_PATH);

        info!("Resolving category: {}", name);
        let response: CategoriesResponse =
            self.transport.request::<()>(Method::GET, &url, None).await?.json().await?;
        debug!("Catalog has {} categories", response.categories.len());

        let id = find_category_id(&response.categories, name)
            .ok_or_else(|| Error::CategoryNotFound(name.to_string()))?;
        debug!("Category {:?} resolved to id {}", name, id);
        Ok(id)
    }

    /// Fetches the first page of items in a category.
    pub async fn fetch_items(&self, category_id: i64, limit: u32) -> Result<Vec<RawItem>> {
        let url = format!("{}{}", self.base_url(), ITEMS_PATH);
        let filter = Filter::first_page(category_id, limit);

        info!("Fetching items for category {} (limit {})", category_id, limit);
        let response: ItemsResponse =
            self.transport.request(Method::POST, &url, Some(&filter)).await?.json().await?;
        debug!("Received {} items", response.items.len());

        Ok(response.items)
    }
}

#[async_trait]
impl Retailer for LentaClient {
    fn name(&self) -> &'static str {
        "lenta"
    }

    async fn parse_category(&self, category: &str, limit: Option<u32>) -> Result<Vec<Product>> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        let category_id = self.resolve_category(category).await?;
        let items = self.fetch_items(category_id, limit).await?;

        Ok(map_items(items, category))
    }
}
