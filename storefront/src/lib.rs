//! HQ Decor storefront core
//!
//! This crate holds:
//! - The static product catalog and its filter/sort query
//! - The request-list manager with durable local persistence
//! - The inquiry-message compiler and its two egress channels
//!   (email `mailto:` link, Instagram clipboard handoff)
//!
//! There is no checkout, payment, or server-side order handling; an inquiry
//! is compiled into a text block and handed to an external channel.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod inquiry;

// Re-exports
pub use cart::RequestListManager;
pub use catalog::{Catalog, CatalogQuery, SortOrder};
pub use config::StoreConfig;
