//! Lenta-specific modules for the HTTP transport, catalog client and data models.

pub mod categories;
pub mod client;
pub mod headers;
pub mod mapper;
pub mod models;
pub mod transport;

pub use client::LentaClient;
pub use models::{Category, Filter, RawItem};
pub use transport::{LentaTransport, TransportConfig};
