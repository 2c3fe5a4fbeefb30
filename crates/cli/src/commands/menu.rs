//! Browsing commands.

use lacapke_core::ProductId;
use lacapke_menu::{MenuError, Storefront};

use crate::output;

/// Print the menu grouped by section.
pub fn show(storefront: &mut Storefront) {
    let page = storefront.open_menu();
    tracing::debug!(source = ?page.source, sections = page.sections.len(), "Menu loaded");
    output::menu(&page);
}

/// Print one product.
///
/// # Errors
///
/// Returns [`MenuError::UnknownProduct`] if the id is not in the catalog.
pub fn product(storefront: &mut Storefront, id: &ProductId) -> Result<(), MenuError> {
    let view = storefront
        .product(id)
        .ok_or_else(|| MenuError::UnknownProduct(id.clone()))?;
    output::product(&view);
    Ok(())
}

/// Print new items and house favourites.
pub fn featured(storefront: &mut Storefront) {
    output::product_list(&storefront.featured());
}
