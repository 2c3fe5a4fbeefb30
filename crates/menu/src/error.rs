//! Unified error handling for storefront operations.
//!
//! Stores recover from bad persisted data on their own; the errors here are
//! the conditions a caller must react to, such as an edit attempted without
//! admin mode or an order for an item that cannot be ordered online.

use lacapke_core::{ProductId, ProductIdError};
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the menu.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Catalog mutation rejected.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Storage backend could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration is invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A product id could not be parsed or derived.
    #[error("Invalid product id: {0}")]
    InvalidId(#[from] ProductIdError),

    /// The current session is not in admin mode.
    #[error("Forbidden: admin mode required")]
    Forbidden,

    /// No item with this id exists.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// The item has no variant with this name.
    #[error("Unknown variant {variant:?} for product {id}")]
    UnknownVariant {
        id: ProductId,
        variant: String,
    },

    /// The item is display-only (zero price).
    #[error("Product {0} is not available for online orders")]
    NotOrderable(ProductId),

    /// A cart line must have a positive quantity.
    #[error("Quantity must be at least 1")]
    InvalidQuantity,
}

/// Result type alias for `MenuError`.
pub type Result<T> = std::result::Result<T, MenuError>;
