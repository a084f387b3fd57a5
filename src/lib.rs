//! lenta-parser - Fetch product listings for a Lenta catalog category
//!
//! Resolves a category name against the retailer's catalog gateway, requests
//! its items and normalizes them into [`Product`] records.

pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod lenta;
pub mod models;
pub mod retailer;
pub mod service;

pub use config::Config;
pub use error::{Error, Result};
pub use lenta::LentaClient;
pub use models::Product;
pub use retailer::{Retailer, DEFAULT_LIMIT};
pub use service::ParserService;
