use super::*;

#[test]
fn test_count_tracks_every_add() {
    let (mut manager, _dir) = create_test_manager();
    let catalog = Catalog::builtin();
    let wreath = catalog.get(1).unwrap();

    assert_eq!(manager.item_count(), 0);

    // Same product twice: no dedup, no merge
    manager.add_item(wreath, gold_wreath_options());
    manager.add_item(wreath, AddItemOptions::default());
    manager.add_item(catalog.get(12).unwrap(), AddItemOptions::default());

    assert_eq!(manager.item_count(), 3);
    assert_eq!(manager.items()[0].id, 1);
    assert_eq!(manager.items()[1].id, 1);
    assert_ne!(manager.items()[0].cart_id, manager.items()[1].cart_id);
}

#[test]
fn test_add_opens_drawer() {
    let (mut manager, _dir) = create_test_manager();
    assert!(!manager.is_drawer_open());

    manager.add_item(Catalog::builtin().get(1).unwrap(), AddItemOptions::default());
    assert!(manager.is_drawer_open());

    manager.set_drawer_open(false);
    assert!(!manager.is_drawer_open());
}

#[test]
fn test_add_captures_options() {
    let (mut manager, _dir) = create_test_manager();
    let catalog = Catalog::builtin();

    manager.add_item(
        catalog.get(2).unwrap(),
        AddItemOptions {
            text: Some("Eid".to_string()),
            custom: Some("ribbon please".to_string()),
            ..Default::default()
        },
    );

    let item = &manager.items()[0];
    assert_eq!(item.selected_text.as_deref(), Some("Eid"));
    assert_eq!(item.custom_text.as_deref(), Some("ribbon please"));
    assert!(item.selected_variant.is_none());
}

#[test]
fn test_remove_by_cart_id() {
    let (mut manager, _dir) = create_test_manager();
    let catalog = Catalog::builtin();

    let first = manager.add_item(catalog.get(1).unwrap(), AddItemOptions::default());
    let second = manager.add_item(catalog.get(11).unwrap(), AddItemOptions::default());

    manager.remove_item(&first);
    assert_eq!(manager.item_count(), 1);
    assert_eq!(manager.items()[0].cart_id, second);
}

#[test]
fn test_remove_unknown_id_is_a_noop() {
    let (mut manager, _dir) = create_test_manager();
    let catalog = Catalog::builtin();

    manager.add_item(catalog.get(1).unwrap(), gold_wreath_options());
    let before = manager.items().to_vec();

    manager.remove_item("not-a-cart-id");

    assert_eq!(manager.items(), &before[..]);
}

#[test]
fn test_subtotal_follows_adds_and_removes() {
    let (mut manager, _dir) = create_test_manager();
    let catalog = Catalog::builtin();

    assert_eq!(manager.subtotal(), 0.0);
    // Not the negative zero an empty f64 sum would give
    assert_eq!(manager.subtotal().to_string(), "0");

    let wreath = manager.add_item(catalog.get(1).unwrap(), AddItemOptions::default());
    assert_eq!(manager.subtotal(), 30.0);

    manager.add_item(catalog.get(12).unwrap(), AddItemOptions::default());
    assert_eq!(manager.subtotal(), 32.0);

    manager.remove_item(&wreath);
    assert_eq!(manager.subtotal(), 2.0);
}

#[test]
fn test_clear_empties_the_list() {
    let (mut manager, _dir) = create_test_manager();
    let catalog = Catalog::builtin();

    manager.add_item(catalog.get(1).unwrap(), AddItemOptions::default());
    manager.add_item(catalog.get(2).unwrap(), AddItemOptions::default());
    manager.clear();

    assert_eq!(manager.item_count(), 0);
    assert_eq!(manager.subtotal(), 0.0);
    assert_eq!(manager.subtotal().to_string(), "0");
}
