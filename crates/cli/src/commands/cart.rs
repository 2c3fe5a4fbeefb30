//! Cart commands.

use lacapke_core::ProductId;
use lacapke_menu::{AddToCart, MenuError, Storefront};

use crate::output;

/// Print the cart.
pub fn show(storefront: &Storefront) {
    output::cart(&storefront.cart());
}

/// Add a product to the cart and print the updated cart.
///
/// # Errors
///
/// Returns an error if the product is unknown or not orderable, the quantity
/// is zero, or the variant does not exist.
pub fn add(
    storefront: &mut Storefront,
    product_id: ProductId,
    variant: Option<String>,
    quantity: u32,
) -> Result<(), MenuError> {
    let summary = storefront.add_to_cart(AddToCart {
        product_id,
        variant,
        quantity,
    })?;
    output::cart(&summary);
    Ok(())
}
