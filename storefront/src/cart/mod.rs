//! RequestListManager - the visitor's request list
//!
//! This module handles:
//! - Controlled mutation of the ordered RequestItem sequence
//! - Durable persistence across sessions (full re-serialize per mutation)
//! - Derived views (count, subtotal) computed on demand
//! - The drawer visibility flag flipped open on every add
//!
//! The manager is constructed explicitly from a [`CartStorage`] handle and
//! threaded to consumers; there is no global singleton. All mutation is
//! single-threaded and synchronous, driven by user-triggered callbacks.

pub mod storage;

#[cfg(test)]
mod tests;

use self::storage::CartStorage;
use shared::models::{AddItemOptions, Product, RequestItem};

/// Owner of the request list
pub struct RequestListManager {
    items: Vec<RequestItem>,
    drawer_open: bool,
    storage: CartStorage,
}

impl std::fmt::Debug for RequestListManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestListManager")
            .field("items", &self.items.len())
            .field("drawer_open", &self.drawer_open)
            .finish()
    }
}

impl RequestListManager {
    /// Open the manager, restoring any previously saved list.
    ///
    /// A missing record starts empty; a corrupt record is logged and
    /// discarded so the list also starts empty.
    pub fn open(storage: CartStorage) -> Self {
        let items = storage.load_or_default();
        tracing::info!(count = items.len(), "request list restored");
        Self {
            items,
            drawer_open: false,
            storage,
        }
    }

    /// Snapshot a product into the list with the visitor's configuration and
    /// open the drawer. Always succeeds: no capacity limit, no dedup.
    ///
    /// Returns the generated cart id of the new entry.
    pub fn add_item(&mut self, product: &Product, options: AddItemOptions) -> String {
        let item = RequestItem::from_product(product, options);
        let cart_id = item.cart_id.clone();
        tracing::info!(product_id = product.id, cart_id = %cart_id, "item added to request list");
        self.items.push(item);
        self.drawer_open = true;
        self.persist();
        cart_id
    }

    /// Remove the entry with the given cart id. Unknown ids are a no-op.
    pub fn remove_item(&mut self, cart_id: &str) {
        let before = self.items.len();
        self.items.retain(|item| item.cart_id != cart_id);
        if self.items.len() == before {
            tracing::debug!(cart_id = %cart_id, "remove ignored, cart id not in list");
            return;
        }
        self.persist();
    }

    /// Empty the list
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Read-only snapshot of the list in insertion order
    pub fn items(&self) -> &[RequestItem] {
        &self.items
    }

    /// Number of entries, recomputed on every query
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of prices over the current entries, computed on demand.
    ///
    /// Folds from 0.0 rather than using sum(): an empty f64 sum is -0.0,
    /// which Display renders as "-0".
    pub fn subtotal(&self) -> f64 {
        self.items.iter().fold(0.0, |acc, item| acc + item.price)
    }

    /// Whether the presentation drawer is open
    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn set_drawer_open(&mut self, open: bool) {
        self.drawer_open = open;
    }

    /// Fire-and-forget write-back; a failed save is logged and swallowed
    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.items) {
            tracing::warn!(error = %e, "failed to persist request list");
        }
    }
}
