//! Durable storage for the request list
//!
//! One JSON record under a fixed key in the store's data directory. The
//! stored value is exactly the serialized RequestItem array, so a saved list
//! round-trips to an identical ordered sequence.

use shared::models::RequestItem;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fixed storage key; the saved list survives restarts on the same device
pub const CART_STORAGE_KEY: &str = "hq-decor-cart";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// File-backed key-value record for the request list
pub struct CartStorage {
    /// Record path: {data_dir}/hq-decor-cart.json
    file_path: PathBuf,
}

impl CartStorage {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            file_path: data_dir.join(format!("{CART_STORAGE_KEY}.json")),
        }
    }

    /// Load the saved sequence, degrading to an empty list.
    ///
    /// A corrupt record is logged and discarded; the error is never surfaced
    /// to the user.
    pub fn load_or_default(&self) -> Vec<RequestItem> {
        match self.load() {
            Ok(items) => items,
            Err(e) => {
                tracing::error!(
                    path = %self.file_path.display(),
                    error = %e,
                    "failed to load saved request list, starting empty"
                );
                Vec::new()
            }
        }
    }

    /// Load the saved sequence; a missing record is an empty list
    pub fn load(&self) -> Result<Vec<RequestItem>, StorageError> {
        if !self.file_path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.file_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Re-serialize the full sequence back to the record
    pub fn save(&self, items: &[RequestItem]) -> Result<(), StorageError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string(items)?;
        std::fs::write(&self.file_path, content)?;
        Ok(())
    }
}
