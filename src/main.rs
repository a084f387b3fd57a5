//! lenta-parser - Fetch product listings for a Lenta catalog category

use anyhow::Result;
use clap::Parser;
use lenta_parser::commands::ParseCommand;
use lenta_parser::config::{parse_limit, Config, OutputFormat};
use lenta_parser::Error;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lenta-parser",
    version,
    about = "Fetch product listings for a Lenta catalog category",
    long_about = "Resolves a category by name in the Lenta catalog and prints its products with prices and links."
)]
struct Cli {
    /// Category name (exact or partial, case-sensitive)
    #[arg(env = "CATEGORY_NAME")]
    category: Option<String>,

    /// Authentication cookie for the catalog gateway
    #[arg(long, env = "LENTA_COOKIE", hide_env_values = true)]
    cookie: Option<String>,

    /// Maximum number of items (default 100; unparsable values are ignored)
    #[arg(short, long, env = "LIMIT")]
    limit: Option<String>,

    /// Proxy URL (e.g., http://host:port)
    #[arg(long, env = "PROXY")]
    proxy: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(cookie) = cli.cookie {
        config.cookie = cookie;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(limit) = cli.limit.as_deref().and_then(parse_limit) {
        config.limit = Some(limit);
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    let category =
        cli.category.ok_or_else(|| Error::Config("CATEGORY_NAME is not set".to_string()))?;

    let report = ParseCommand::new(config).execute(&category).await?;

    if let Some(err) = &report.error {
        eprintln!("{}", err);
    }
    if !report.output.is_empty() {
        println!("{}", report.output);
    }

    Ok(())
}
