//! Storefront flows: browsing, ordering and admin editing.

#![allow(clippy::unwrap_used)]

use lacapke_core::{Category, MenuItemDraft, Price, ProductId};
use lacapke_integration_tests::TestContext;
use lacapke_menu::{AddToCart, Level, LoadSource, MenuError, Route};

fn id(s: &str) -> ProductId {
    ProductId::parse(s).unwrap()
}

#[test]
fn test_order_updates_badge_on_next_visit() {
    let ctx = TestContext::new().unwrap();
    let mut storefront = ctx.storefront().unwrap();
    assert_eq!(storefront.open_menu().source, LoadSource::Reset);

    for _ in 0..4 {
        storefront
            .add_to_cart(AddToCart {
                product_id: id("tosti-madre"),
                variant: None,
                quantity: 3,
            })
            .unwrap();
    }

    let page = ctx.storefront().unwrap().open_menu();
    assert_eq!(page.source, LoadSource::Loaded);
    assert_eq!(page.cart_count, 12);
    assert_eq!(page.cart_badge, "9+");
    assert_eq!(ctx.recorder.routes(), vec![Route::Menu; 4]);
}

#[test]
fn test_cart_line_uses_resolved_image() {
    let ctx = TestContext::new().unwrap();
    let mut storefront = ctx.storefront().unwrap();
    storefront.login("Admin1");

    let mut item = storefront.edit_product(&id("chipa-prensado")).unwrap();
    item.image = Some("https://cdn.example.com/chipa.webp".to_string());
    storefront.save_product(item).unwrap();

    let mut item = storefront.edit_product(&id("tosti-madre")).unwrap();
    item.image = Some("/not-uploaded.png".to_string());
    storefront.save_product(item).unwrap();

    storefront
        .add_to_cart(AddToCart::one(id("chipa-prensado")))
        .unwrap();
    let summary = storefront
        .add_to_cart(AddToCart::one(id("tosti-madre")))
        .unwrap();

    let images: Vec<_> = summary.entries.iter().map(|e| e.image.as_str()).collect();
    assert_eq!(
        images,
        vec!["https://cdn.example.com/chipa.webp", "/default-product-icon.png"]
    );
}

#[test]
fn test_visitor_cannot_edit() {
    let ctx = TestContext::new().unwrap();
    let mut storefront = ctx.storefront().unwrap();
    storefront.login("visitor");

    let err = storefront
        .add_product(MenuItemDraft {
            name: "Latte".to_string(),
            price: Price::new(3000),
            ..MenuItemDraft::default()
        })
        .unwrap_err();
    assert!(matches!(err, MenuError::Forbidden));
    assert!(storefront.product(&id("latte")).is_none());
    assert!(!storefront.open_menu().is_admin);
}

#[test]
fn test_admin_session_survives_restart() {
    let ctx = TestContext::new().unwrap();
    ctx.storefront().unwrap().login("Admin1");

    let mut storefront = ctx.storefront().unwrap();
    assert!(storefront.open_menu().is_admin);
    storefront.delete_product(&id("fried-plantain")).unwrap();

    storefront.logout();
    assert!(matches!(
        storefront.reset_catalog(),
        Err(MenuError::Forbidden)
    ));
    assert!(storefront.product(&id("fried-plantain")).is_none());
}

#[test]
fn test_zero_price_item_cannot_be_ordered() {
    let ctx = TestContext::new().unwrap();
    let mut storefront = ctx.storefront().unwrap();
    storefront.login("Admin1");
    storefront
        .add_product(MenuItemDraft {
            name: "Torta del Día".to_string(),
            ..MenuItemDraft::default()
        })
        .unwrap();

    let view = storefront.product(&id("torta-del-dia")).unwrap();
    assert!(!view.orderable);
    assert_eq!(view.item.category, Category::Desserts);

    let err = storefront
        .add_to_cart(AddToCart::one(id("torta-del-dia")))
        .unwrap_err();
    assert!(matches!(err, MenuError::NotOrderable(_)));
    assert!(storefront.cart().entries.is_empty());

    let last = ctx.recorder.notifications().pop().unwrap();
    assert_eq!(last.level, Level::Error);
    assert!(ctx.recorder.routes().is_empty());
}

#[test]
fn test_reset_restores_deleted_items() {
    let ctx = TestContext::new().unwrap();
    let mut storefront = ctx.storefront().unwrap();
    storefront.login("Admin1");
    let before = storefront.open_menu();

    storefront.delete_product(&id("wrap-pollo")).unwrap();
    storefront.reset_catalog().unwrap();

    let after = storefront.open_menu();
    assert_eq!(after.sections, before.sections);
}
