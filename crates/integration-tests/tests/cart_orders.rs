//! Cart store behavior across restarts.

#![allow(clippy::unwrap_used)]

use lacapke_core::{CartEntry, Price, ProductId};
use lacapke_integration_tests::TestContext;
use lacapke_menu::storage::keys;
use lacapke_menu::{CartStore, LoadSource};

fn entry(id: &str, variant: Option<&str>, quantity: u32) -> CartEntry {
    CartEntry {
        id: ProductId::parse(id).unwrap(),
        name: id.to_string(),
        price: Price::new(500),
        quantity,
        image: "/default-product-icon.png".to_string(),
        variant: variant.map(str::to_string),
    }
}

fn quantity_of(entries: &[CartEntry], id: &str) -> Option<u32> {
    entries
        .iter()
        .find(|e| e.id.as_str() == id)
        .map(|e| e.quantity)
}

#[test]
fn test_same_pair_merges_across_restart() {
    let ctx = TestContext::new().unwrap();
    ctx.cart().unwrap().add_item(entry("x", Some("v"), 2));

    let entries = ctx.cart().unwrap().add_item(entry("x", Some("v"), 3));
    assert_eq!(entries.len(), 1);
    assert_eq!(quantity_of(&entries, "x"), Some(5));
}

#[test]
fn test_variants_stay_distinct() {
    let ctx = TestContext::new().unwrap();
    let cart = ctx.cart().unwrap();
    cart.add_item(entry("x", Some("v1"), 1));
    let entries = cart.add_item(entry("x", Some("v2"), 1));

    assert_eq!(entries.len(), 2);
    assert_eq!(ctx.cart().unwrap().get_all(), entries);
}

#[test]
fn test_totals() {
    let ctx = TestContext::new().unwrap();
    let cart = ctx.cart().unwrap();
    cart.add_item(entry("a", None, 2));
    cart.add_item(entry("b", None, 1));
    let entries = cart.add_item(entry("a", None, 1));

    assert_eq!(entries.len(), 2);
    assert_eq!(quantity_of(&entries, "a"), Some(3));
    assert_eq!(quantity_of(&entries, "b"), Some(1));
    assert_eq!(CartStore::total_count(&entries), 4);
    assert_eq!(CartStore::subtotal(&entries), Price::new(2000));
}

#[test]
fn test_corrupt_cart_file_reads_empty() {
    let ctx = TestContext::new().unwrap();
    ctx.storage().unwrap().set(keys::CART, "not json").unwrap();

    let load = ctx.cart().unwrap().load();
    assert!(load.entries.is_empty());
    assert_eq!(load.source, LoadSource::Recovered);
}
