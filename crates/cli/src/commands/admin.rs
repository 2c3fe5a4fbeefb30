//! Catalog editing commands. All of them require admin mode.
//!
//! # Usage
//!
//! ```bash
//! capke admin add "Latte de Avellana" --price 3900
//! capke admin price wrap-pollo 12900
//! capke admin delete fried-plantain
//! capke admin import new-items.yaml
//! ```
//!
//! The import file is a YAML list of drafts using the persisted field names:
//!
//! ```yaml
//! - name: Torta de Ricota
//!   price: 5200
//!   isVegetarian: true
//! - id: cafe-doble
//!   name: Café Doble
//!   price: 3100
//!   category: coffee
//! ```

use std::path::{Path, PathBuf};

use lacapke_core::{Category, MenuItemDraft, Price, ProductId};
use lacapke_menu::{CatalogError, MenuError, Storefront};
use thiserror::Error;

/// Errors that can occur while importing a catalog file.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a YAML list of drafts.
    #[error("Invalid import file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// A draft was rejected for a reason other than a duplicate id.
    #[error(transparent)]
    Menu(#[from] MenuError),
}

/// Build a draft from command-line arguments.
#[must_use]
pub fn draft(
    name: String,
    id: Option<ProductId>,
    price: u64,
    category: Option<Category>,
    description: String,
) -> MenuItemDraft {
    MenuItemDraft {
        id,
        name,
        description,
        price: Price::new(price),
        category,
        ..MenuItemDraft::default()
    }
}

/// Add one product.
///
/// # Errors
///
/// Returns an error outside admin mode or if the id is taken.
pub fn add(storefront: &mut Storefront, draft: MenuItemDraft) -> Result<(), MenuError> {
    let items = storefront.add_product(draft)?;
    if let Some(item) = items.last() {
        tracing::info!(id = %item.id, category = %item.category, price = %item.price, "Product added");
    }
    Ok(())
}

/// Change the price of an existing product.
///
/// # Errors
///
/// Returns an error outside admin mode or if the product does not exist.
pub fn set_price(storefront: &mut Storefront, id: &ProductId, price: u64) -> Result<(), MenuError> {
    let mut item = storefront.edit_product(id)?;
    let previous = item.price;
    item.price = Price::new(price);
    storefront.save_product(item)?;
    tracing::info!(%id, %previous, price = %Price::new(price), "Price changed");
    Ok(())
}

/// Delete a product.
///
/// # Errors
///
/// Returns an error outside admin mode or if the product does not exist.
pub fn delete(storefront: &mut Storefront, id: &ProductId) -> Result<(), MenuError> {
    let items = storefront.delete_product(id)?;
    tracing::info!(%id, remaining = items.len(), "Product deleted");
    Ok(())
}

/// Restore the default menu.
///
/// # Errors
///
/// Returns an error outside admin mode.
pub fn reset(storefront: &mut Storefront) -> Result<(), MenuError> {
    let items = storefront.reset_catalog()?;
    tracing::info!(count = items.len(), "Catalog restored");
    Ok(())
}

/// Add every draft in a YAML file, skipping ids that already exist.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if any draft is
/// rejected for a reason other than a duplicate id. Drafts before the failing
/// one stay added.
pub fn import(storefront: &mut Storefront, path: &Path) -> Result<(), ImportError> {
    tracing::info!(path = %path.display(), "Loading products from file");

    let content = std::fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let drafts: Vec<MenuItemDraft> =
        serde_yaml::from_str(&content).map_err(|source| ImportError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(count = drafts.len(), "Parsed import file");

    let mut added = 0usize;
    let mut skipped = 0usize;
    for draft in drafts {
        match storefront.add_product(draft) {
            Ok(_) => added += 1,
            Err(MenuError::Catalog(CatalogError::Duplicate(id))) => {
                tracing::warn!(%id, "Skipping existing product");
                skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    tracing::info!(added, skipped, "Import complete");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use lacapke_menu::{MemoryStorage, MenuConfig, Recorder};

    use super::*;

    fn admin_storefront() -> Storefront {
        let recorder = Arc::new(Recorder::new());
        let storefront = Storefront::new(
            Arc::new(MemoryStorage::new()),
            &MenuConfig::default(),
            recorder.clone(),
            recorder,
        );
        storefront.login("Admin1");
        storefront
    }

    #[test]
    fn test_import_skips_duplicates() {
        let mut storefront = admin_storefront();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "- name: Torta de Ricota\n  price: 5200\n- id: wrap-pollo\n  name: Wrap\n  price: 1"
        )
        .unwrap();

        import(&mut storefront, file.path()).unwrap();

        let id = ProductId::parse("torta-de-ricota").unwrap();
        let view = storefront.product(&id).unwrap();
        assert_eq!(view.item.category, Category::Desserts);
        let wrap = storefront
            .product(&ProductId::parse("wrap-pollo").unwrap())
            .unwrap();
        assert_eq!(wrap.item.price, Price::new(12500));
    }

    #[test]
    fn test_import_rejects_malformed_file() {
        let mut storefront = admin_storefront();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name: [unterminated").unwrap();

        let err = import(&mut storefront, file.path()).unwrap_err();
        assert!(matches!(err, ImportError::Parse { .. }));
    }

    #[test]
    fn test_set_price_on_missing_product_fails() {
        let mut storefront = admin_storefront();
        let id = ProductId::parse("no-existe").unwrap();
        let err = set_price(&mut storefront, &id, 100).unwrap_err();
        assert!(matches!(err, MenuError::Catalog(CatalogError::NotFound(_))));
    }
}
