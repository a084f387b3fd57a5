//! Output formatting for products (text, JSON, CSV).

use crate::config::OutputFormat;
use crate::models::Product;

/// Formats products for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a single product.
    pub fn format_product(&self, product: &Product) -> String {
        match self.format {
            OutputFormat::Json => self.json_single(product),
            OutputFormat::Text => self.text_single(product),
            OutputFormat::Csv => self.csv_products(std::slice::from_ref(product)),
        }
    }

    /// Formats multiple products. An empty list renders as nothing in text mode.
    pub fn format_products(&self, products: &[Product]) -> String {
        match self.format {
            OutputFormat::Json => self.json_products(products),
            OutputFormat::Text => self.text_products(products),
            OutputFormat::Csv => self.csv_products(products),
        }
    }

    // JSON formatting

    fn json_single(&self, product: &Product) -> String {
        serde_json::to_string_pretty(product).unwrap_or_else(|_| "{}".to_string())
    }

    fn json_products(&self, products: &[Product]) -> String {
        serde_json::to_string_pretty(products).unwrap_or_else(|_| "[]".to_string())
    }

    // Text formatting

    fn text_single(&self, product: &Product) -> String {
        [
            format!("Категория: {}", product.category),
            format!("Название: {}", product.name),
            format!("Цена: {}", product.whole_price()),
            format!("Ссылка на страницу: {}", product.link),
        ]
        .join("\n")
    }

    fn text_products(&self, products: &[Product]) -> String {
        products.iter().map(|p| self.text_single(p)).collect::<Vec<_>>().join("\n\n")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "category,name,price,link".to_string()
    }

    fn csv_products(&self, products: &[Product]) -> String {
        let mut lines = Vec::with_capacity(products.len() + 1);
        lines.push(self.csv_header());

        for product in products {
            lines.push(format!(
                "{},{},{},{}",
                Self::csv_escape(&product.category),
                Self::csv_escape(&product.name),
                product.price,
                Self::csv_escape(&product.link)
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product() -> Product {
        Product {
            name: "Яблоки".to_string(),
            category: "Фрукты".to_string(),
            price: 120.75,
            link: "https://lenta.com/product/apples".to_string(),
        }
    }

    #[test]
    fn test_text_single() {
        let formatter = Formatter::new(OutputFormat::Text);
        let output = formatter.format_product(&make_product());
        assert_eq!(
            output,
            "Категория: Фрукты\nНазвание: Яблоки\nЦена: 120\nСсылка на страницу: https://lenta.com/product/apples"
        );
    }

    #[test]
    fn test_text_blocks_separated_by_blank_line() {
        let formatter = Formatter::new(OutputFormat::Text);
        let output = formatter.format_products(&[make_product(), make_product()]);
        assert_eq!(output.matches("Категория:").count(), 2);
        assert!(output.contains("apples\n\nКатегория"));
    }

    #[test]
    fn test_empty_products() {
        assert_eq!(Formatter::new(OutputFormat::Text).format_products(&[]), "");
        assert_eq!(Formatter::new(OutputFormat::Json).format_products(&[]), "[]");
        assert_eq!(
            Formatter::new(OutputFormat::Csv).format_products(&[]),
            "category,name,price,link"
        );
    }

    #[test]
    fn test_json_products() {
        let formatter = Formatter::new(OutputFormat::Json);
        let output = formatter.format_products(&[make_product()]);
        assert!(output.starts_with('['));

        let parsed: Vec<Product> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, vec![make_product()]);
    }

    #[test]
    fn test_csv_escaping() {
        let mut product = make_product();
        product.name = "Сыр \"Российский\", 45%".to_string();

        let formatter = Formatter::new(OutputFormat::Csv);
        let output = formatter.format_products(&[product]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "Фрукты,\"Сыр \"\"Российский\"\", 45%\",120.75,https://lenta.com/product/apples"
        );
    }
}
