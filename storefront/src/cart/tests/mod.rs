use super::*;
use crate::catalog::Catalog;
use shared::models::AddItemOptions;
use tempfile::TempDir;

mod test_core;

fn create_test_manager() -> (RequestListManager, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let manager = RequestListManager::open(CartStorage::new(dir.path()));
    (manager, dir)
}

fn gold_wreath_options() -> AddItemOptions {
    AddItemOptions {
        variant: Some("Gold".to_string()),
        ..Default::default()
    }
}
