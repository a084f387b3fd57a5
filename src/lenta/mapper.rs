//! Conversion of Lenta items into [`Product`] records.

use super::models::RawItem;
use crate::models::Product;

/// Public site host used for product links.
pub const HOST: &str = "https://lenta.com";

/// Link to the product page for `slug`.
pub fn product_link(slug: &str) -> String {
    format!("{}/product/{}", HOST, slug)
}

/// Maps items one-to-one, keeping their order.
pub fn map_items(items: Vec<RawItem>, category: &str) -> Vec<Product> {
    items
        .into_iter()
        .map(|item| Product {
            link: product_link(&item.slug),
            name: item.name,
            category: category.to_string(),
            price: item.prices.price as f64,
        })
        .collect()
}
