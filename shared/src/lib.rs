//! Shared types for the HQ Decor storefront
//!
//! Domain models (products, request-list items, delivery options) and the
//! unified error type consumed by the storefront crate.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use serde::{Deserialize, Serialize};
