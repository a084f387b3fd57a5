//! Category name to catalog id resolution.

use super::models::Category;

/// Picks the id for `name` from a catalog.
///
/// An exact name match wins; otherwise the first category whose name contains
/// `name` (case-sensitive). Ties go to catalog order.
pub fn find_category_id(categories: &[Category], name: &str) -> Option<i64> {
    categories
        .iter()
        .find(|c| c.name == name)
        .or_else(|| categories.iter().find(|c| c.name.contains(name)))
        .map(|c| c.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(id: i64, name: &str) -> Category {
        Category { id, name: name.to_string(), slug: String::new() }
    }

    #[test]
    fn test_exact_match() {
        let catalog = vec![Category { id: 7, name: "Овощи".to_string(), slug: "ovoshi".to_string() }];
        assert_eq!(find_category_id(&catalog, "Овощи"), Some(7));
    }

    #[test]
    fn test_substring_match() {
        let catalog = vec![cat(3, "Молочные продукты")];
        assert_eq!(find_category_id(&catalog, "Молочные"), Some(3));
    }

    #[test]
    fn test_exact_match_beats_earlier_substring() {
        let catalog = vec![cat(1, "Овощи и фрукты"), cat(2, "Овощи")];
        assert_eq!(find_category_id(&catalog, "Овощи"), Some(2));
    }

    #[test]
    fn test_first_substring_match_wins() {
        let catalog = vec![cat(10, "Сыры твердые"), cat(11, "Сыры мягкие")];
        assert_eq!(find_category_id(&catalog, "Сыры"), Some(10));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let catalog = vec![cat(5, "Хлеб")];
        assert_eq!(find_category_id(&catalog, "хлеб"), None);
    }

    #[test]
    fn test_no_match() {
        let catalog = vec![cat(1, "Хлеб"), cat(2, "Рыба")];
        assert_eq!(find_category_id(&catalog, "Мясо"), None);
    }

    #[test]
    fn test_empty_catalog() {
        assert_eq!(find_category_id(&[], "Овощи"), None);
        assert_eq!(find_category_id(&[], ""), None);
    }
}
