//! Category parse command implementation.

use crate::config::Config;
use crate::error::Error;
use crate::format::Formatter;
use crate::lenta::LentaClient;
use crate::retailer::Retailer;
use crate::service::ParserService;
use anyhow::{Context, Result};
use tracing::{info, warn};

/// What a parse run produced: rendered products plus the error that cut it short, if any.
#[derive(Debug)]
pub struct ParseReport {
    /// Request-level failure; the run still completes with no products
    pub error: Option<Error>,
    /// Formatted products
    pub output: String,
    /// Number of products rendered
    pub count: usize,
}

/// Fetches and renders one category.
pub struct ParseCommand {
    config: Config,
}

impl ParseCommand {
    /// Creates a new parse command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Parses the category against Lenta and renders the result.
    ///
    /// Only a missing cookie or category, or an unbuildable HTTP client, is an `Err`.
    pub async fn execute(&self, category: &str) -> Result<ParseReport> {
        self.config.validate()?;

        let client =
            LentaClient::with_base_url(&self.config.transport(), self.config.base_url.clone())
                .context("Failed to create HTTP client")?;

        self.execute_with_retailer(client, category).await
    }

    /// Parses the category with a provided retailer (for testing).
    pub async fn execute_with_retailer(
        &self,
        retailer: impl Retailer,
        category: &str,
    ) -> Result<ParseReport> {
        let category = category.trim();
        if category.is_empty() {
            return Err(Error::Config("CATEGORY_NAME is not set".to_string()).into());
        }

        info!("Parsing {} category: {}", retailer.name(), category);
        let service = ParserService::new(retailer);

        let (products, error) = match service.parse(category, self.config.limit).await {
            Ok(products) => (products, None),
            Err(e) => {
                warn!("Parse failed: {}", e);
                (Vec::new(), Some(e))
            }
        };

        info!("Found {} products", products.len());

        let formatter = Formatter::new(self.config.format);
        Ok(ParseReport { error, output: formatter.format_products(&products), count: products.len() })
    }
}
