//! Wire models for the Lenta catalog API.

use serde::{Deserialize, Serialize};

/// A catalog category as returned by `GET /catalog/categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

/// Envelope of the categories endpoint.
#[derive(Debug, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

/// Price pair attached to each item.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Prices {
    /// Price before discounts
    pub cost: i64,
    /// Price the customer pays
    pub price: i64,
}

/// An item as returned by `POST /catalog/items`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawItem {
    pub name: String,
    pub count: i64,
    pub prices: Prices,
    pub slug: String,
}

/// Envelope of the items endpoint. `items` is required.
#[derive(Debug, Deserialize)]
pub struct ItemsResponse {
    pub items: Vec<RawItem>,
}

/// Request body for the items endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub category_id: i64,
    pub limit: u32,
    pub offset: u32,
}

impl Filter {
    /// First page of a category.
    pub fn first_page(category_id: i64, limit: u32) -> Self {
        Self { category_id, limit, offset: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_serializes_camel_case() {
        let filter = Filter::first_page(42, 100);
        let json = serde_json::to_value(filter).unwrap();
        assert_eq!(json, serde_json::json!({"categoryId": 42, "limit": 100, "offset": 0}));
    }

    #[test]
    fn test_category_without_slug() {
        let category: Category =
            serde_json::from_str(r#"{"id": 3, "name": "Молочные продукты"}"#).unwrap();
        assert_eq!(category.id, 3);
        assert_eq!(category.name, "Молочные продукты");
        assert!(category.slug.is_empty());
    }

    #[test]
    fn test_item_with_partial_fields() {
        let item: RawItem =
            serde_json::from_str(r#"{"name": "Яблоки", "slug": "apples", "prices": {"price": 120}}"#)
                .unwrap();
        assert_eq!(item.name, "Яблоки");
        assert_eq!(item.count, 0);
        assert_eq!(item.prices, Prices { cost: 0, price: 120 });
    }

    #[test]
    fn test_items_response_requires_items() {
        let result = serde_json::from_str::<ItemsResponse>(r#"{"total": 0}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<ItemsResponse>(r#"{"items": "nope"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_items_response_ignores_unknown_fields() {
        let response: ItemsResponse = serde_json::from_str(
            r#"{"items": [{"id": 1, "name": "Хлеб", "count": 3, "prices": {"cost": 60, "price": 55}, "slug": "bread", "badges": []}], "total": 1}"#,
        )
        .unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].prices.cost, 60);
        assert_eq!(response.items[0].count, 3);
    }
}
