//! Catalog store: the authoritative list of menu items.
//!
//! # Persistence
//!
//! The snapshot is stored as a JSON array under [`keys::PRODUCTS`] and tagged
//! with [`keys::PRODUCTS_VERSION`]. On load the tag is compared with the
//! store's version; a mismatch discards the persisted snapshot and reloads the
//! defaults. There is no migration of older shapes: a new default menu always
//! wins over stale local data.
//!
//! # Failure semantics
//!
//! Reads never fail. Unreadable or unparsable data is replaced by the
//! defaults and reported through [`LoadSource`]. Write failures are logged
//! and the in-memory snapshot is still returned.

pub mod classifier;
mod defaults;

pub use defaults::{CATALOG_VERSION, default_items};

use std::collections::HashSet;
use std::sync::Arc;

use lacapke_core::{Category, MenuItem, ProductId};
use thiserror::Error;

use crate::storage::{KeyValueStore, keys};

/// Ids of the house favourites shown alongside new items.
const FEATURED_IDS: &[&str] = &["me-lo-merezco", "tosti-espinaca-champis"];

/// Which path a load took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Persisted data was present, current and valid.
    Loaded,
    /// Persisted data was present but unusable; defaults were substituted.
    Recovered,
    /// Nothing usable was persisted (absent or stale version); started
    /// from defaults.
    Reset,
}

/// Result of loading the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLoad {
    pub items: Vec<MenuItem>,
    pub source: LoadSource,
}

/// Errors returned by catalog mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// An item with this id already exists.
    #[error("product already exists: {0}")]
    Duplicate(ProductId),

    /// No item has this id.
    #[error("product not found: {0}")]
    NotFound(ProductId),
}

/// Owns the catalog snapshot for one session.
pub struct CatalogStore {
    storage: Arc<dyn KeyValueStore>,
    defaults: Vec<MenuItem>,
    version: String,
    items: Option<Vec<MenuItem>>,
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("version", &self.version)
            .field("defaults", &self.defaults.len())
            .field("items", &self.items.as_ref().map(Vec::len))
            .finish_non_exhaustive()
    }
}

impl CatalogStore {
    /// Create a store backed by `storage` with the built-in default menu.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_defaults(storage, default_items(), CATALOG_VERSION)
    }

    /// Create a store with a custom default menu and version tag.
    #[must_use]
    pub fn with_defaults(
        storage: Arc<dyn KeyValueStore>,
        defaults: Vec<MenuItem>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            defaults,
            version: version.into(),
            items: None,
        }
    }

    /// The version tag this store writes and expects.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Load the catalog from storage, applying the version gate.
    ///
    /// Always re-reads storage and replaces the cached snapshot.
    pub fn load(&mut self) -> CatalogLoad {
        let stored_version = self.read(keys::PRODUCTS_VERSION);
        if stored_version.as_deref() != Some(self.version.as_str()) {
            tracing::info!(
                stored = stored_version.as_deref().unwrap_or("<none>"),
                current = %self.version,
                "Catalog version changed, loading defaults"
            );
            return CatalogLoad {
                items: self.reset(),
                source: LoadSource::Reset,
            };
        }

        let Some(raw) = self.read(keys::PRODUCTS) else {
            tracing::info!("No persisted catalog, loading defaults");
            return CatalogLoad {
                items: self.reset(),
                source: LoadSource::Reset,
            };
        };

        match serde_json::from_str::<Vec<MenuItem>>(&raw) {
            Ok(items) if has_unique_ids(&items) => {
                tracing::debug!(count = items.len(), "Loaded persisted catalog");
                self.items = Some(items.clone());
                CatalogLoad {
                    items,
                    source: LoadSource::Loaded,
                }
            }
            Ok(_) => {
                tracing::warn!("Persisted catalog has duplicate ids, loading defaults");
                CatalogLoad {
                    items: self.reset(),
                    source: LoadSource::Recovered,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse persisted catalog, loading defaults");
                CatalogLoad {
                    items: self.reset(),
                    source: LoadSource::Recovered,
                }
            }
        }
    }

    /// Current snapshot. Loads on first use.
    pub fn get_all(&mut self) -> Vec<MenuItem> {
        self.snapshot().clone()
    }

    /// Look up one item.
    pub fn get(&mut self, id: &ProductId) -> Option<MenuItem> {
        self.snapshot().iter().find(|item| &item.id == id).cloned()
    }

    /// Items in `category`, in catalog order.
    pub fn by_category(&mut self, category: Category) -> Vec<MenuItem> {
        self.snapshot()
            .iter()
            .filter(|item| item.category == category)
            .cloned()
            .collect()
    }

    /// New items plus the house favourites, in catalog order.
    pub fn featured(&mut self) -> Vec<MenuItem> {
        self.snapshot()
            .iter()
            .filter(|item| item.is_new || FEATURED_IDS.contains(&item.id.as_str()))
            .cloned()
            .collect()
    }

    /// Append a new item.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Duplicate`] if the id is taken; the snapshot is
    /// left untouched.
    pub fn add(&mut self, item: MenuItem) -> Result<Vec<MenuItem>, CatalogError> {
        let items = self.snapshot();
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(CatalogError::Duplicate(item.id));
        }
        tracing::debug!(id = %item.id, "Adding product");
        items.push(item);
        Ok(self.commit())
    }

    /// Replace the item with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no item has that id.
    pub fn update(&mut self, item: MenuItem) -> Result<Vec<MenuItem>, CatalogError> {
        let items = self.snapshot();
        let Some(slot) = items.iter_mut().find(|existing| existing.id == item.id) else {
            return Err(CatalogError::NotFound(item.id));
        };
        tracing::debug!(id = %item.id, "Updating product");
        *slot = item;
        Ok(self.commit())
    }

    /// Remove the item with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no item has that id.
    pub fn delete(&mut self, id: &ProductId) -> Result<Vec<MenuItem>, CatalogError> {
        let items = self.snapshot();
        let before = items.len();
        items.retain(|item| &item.id != id);
        if items.len() == before {
            return Err(CatalogError::NotFound(id.clone()));
        }
        tracing::debug!(%id, "Deleted product");
        Ok(self.commit())
    }

    /// Discard persisted data and customizations and reload the defaults.
    pub fn reset(&mut self) -> Vec<MenuItem> {
        if let Err(e) = self.storage.remove(keys::PRODUCTS) {
            tracing::warn!(error = %e, "Failed to clear persisted catalog");
        }
        self.items = Some(self.defaults.clone());
        let items = self.commit();
        if let Err(e) = self.storage.set(keys::PRODUCTS_VERSION, &self.version) {
            tracing::warn!(error = %e, "Failed to persist catalog version");
        }
        tracing::info!(count = items.len(), version = %self.version, "Catalog reset to defaults");
        items
    }

    /// Infer a category for an item created without one.
    #[must_use]
    pub fn resolve_default_category(id: &ProductId, name: &str) -> Category {
        classifier::classify(id, name)
    }

    /// Cached snapshot, loading it first if needed.
    fn snapshot(&mut self) -> &mut Vec<MenuItem> {
        if self.items.is_none() {
            self.load();
        }
        self.items.get_or_insert_with(Vec::new)
    }

    /// Persist the cached snapshot and return a copy of it.
    fn commit(&mut self) -> Vec<MenuItem> {
        let items = self.items.clone().unwrap_or_default();
        match serde_json::to_string(&items) {
            Ok(json) => {
                if let Err(e) = self.storage.set(keys::PRODUCTS, &json) {
                    tracing::warn!(error = %e, "Failed to persist catalog");
                }
            }
            Err(e) => tracing::error!(error = %e, "Failed to serialize catalog"),
        }
        items
    }

    /// Read a key, treating storage errors as absent data.
    fn read(&self, key: &str) -> Option<String> {
        self.storage.get(key).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "Failed to read storage");
            None
        })
    }
}

fn has_unique_ids(items: &[MenuItem]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().all(|item| seen.insert(&item.id))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lacapke_core::Price;

    use super::*;
    use crate::storage::MemoryStorage;

    fn item(id: &str, price: u64, category: Category) -> MenuItem {
        MenuItem::new(ProductId::parse(id).unwrap(), id, Price::new(price), category)
    }

    fn small_defaults() -> Vec<MenuItem> {
        vec![
            item("tosti-madre", 8200, Category::Brunch),
            item("chipa-prensado", 3500, Category::Breakfast),
            item("wrap-pollo", 12500, Category::Lunch),
        ]
    }

    fn store_with(storage: Arc<MemoryStorage>, version: &str) -> CatalogStore {
        CatalogStore::with_defaults(storage, small_defaults(), version)
    }

    #[test]
    fn test_empty_storage_resets_and_persists_version() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = store_with(storage.clone(), "v1");

        let load = store.load();
        assert_eq!(load.source, LoadSource::Reset);
        assert_eq!(load.items, small_defaults());
        assert_eq!(
            storage.get(keys::PRODUCTS_VERSION).unwrap().as_deref(),
            Some("v1")
        );
        assert!(storage.get(keys::PRODUCTS).unwrap().is_some());
    }

    #[test]
    fn test_current_version_loads_persisted() {
        let storage = Arc::new(MemoryStorage::new());
        store_with(storage.clone(), "v1")
            .delete(&ProductId::parse("wrap-pollo").unwrap())
            .unwrap();

        let load = store_with(storage, "v1").load();
        assert_eq!(load.source, LoadSource::Loaded);
        assert_eq!(load.items.len(), 2);
    }

    #[test]
    fn test_stale_version_discards_customizations() {
        let storage = Arc::new(MemoryStorage::new());
        store_with(storage.clone(), "A")
            .delete(&ProductId::parse("wrap-pollo").unwrap())
            .unwrap();

        let load = store_with(storage.clone(), "B").load();
        assert_eq!(load.source, LoadSource::Reset);
        assert_eq!(load.items, small_defaults());
        assert_eq!(
            storage.get(keys::PRODUCTS_VERSION).unwrap().as_deref(),
            Some("B")
        );
    }

    #[test]
    fn test_corrupt_json_recovers() {
        let storage = Arc::new(MemoryStorage::with_entries([
            (keys::PRODUCTS_VERSION, "v1"),
            (keys::PRODUCTS, "{not json"),
        ]));
        let load = store_with(storage, "v1").load();
        assert_eq!(load.source, LoadSource::Recovered);
        assert_eq!(load.items, small_defaults());
    }

    #[test]
    fn test_duplicate_ids_in_storage_recover() {
        let dup = serde_json::to_string(&vec![
            item("tosti-madre", 1, Category::Brunch),
            item("tosti-madre", 2, Category::Brunch),
        ])
        .unwrap();
        let storage = Arc::new(MemoryStorage::with_entries([
            (keys::PRODUCTS_VERSION.to_string(), "v1".to_string()),
            (keys::PRODUCTS.to_string(), dup),
        ]));
        let load = store_with(storage, "v1").load();
        assert_eq!(load.source, LoadSource::Recovered);
    }

    #[test]
    fn test_unavailable_storage_still_returns_defaults() {
        let mut store = store_with(Arc::new(MemoryStorage::unavailable()), "v1");
        let load = store.load();
        assert_eq!(load.source, LoadSource::Reset);
        assert_eq!(load.items, small_defaults());

        let items = store.add(item("latte", 3000, Category::Coffee)).unwrap();
        assert_eq!(items.len(), 4);
    }

    #[test]
    fn test_add_rejects_duplicate() {
        let mut store = store_with(Arc::new(MemoryStorage::new()), "v1");
        let err = store
            .add(item("tosti-madre", 1, Category::Brunch))
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::Duplicate(ProductId::parse("tosti-madre").unwrap())
        );
        assert_eq!(store.get_all(), small_defaults());
    }

    #[test]
    fn test_update_and_delete_missing_id() {
        let mut store = store_with(Arc::new(MemoryStorage::new()), "v1");
        let ghost = item("ghost", 1, Category::Brunch);

        assert!(matches!(
            store.update(ghost.clone()),
            Err(CatalogError::NotFound(_))
        ));
        assert!(matches!(
            store.delete(&ghost.id),
            Err(CatalogError::NotFound(_))
        ));
        assert_eq!(store.get_all(), small_defaults());
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut store = store_with(Arc::new(MemoryStorage::new()), "v1");
        let updated = item("chipa-prensado", 9999, Category::Breakfast);

        let items = store.update(updated.clone()).unwrap();
        assert_eq!(items.get(1), Some(&updated));
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = store_with(storage.clone(), "v1");
        store.add(item("latte", 3000, Category::Coffee)).unwrap();

        let first = store.reset();
        let first_json = storage.get(keys::PRODUCTS).unwrap();
        let second = store.reset();
        let second_json = storage.get(keys::PRODUCTS).unwrap();

        assert_eq!(first, small_defaults());
        assert_eq!(first, second);
        assert_eq!(first_json, second_json);
    }

    #[test]
    fn test_by_category_and_featured() {
        let mut store = CatalogStore::new(Arc::new(MemoryStorage::new()));

        let lunch = store.by_category(Category::Lunch);
        assert!(!lunch.is_empty());
        assert!(lunch.iter().all(|i| i.category == Category::Lunch));

        let featured: Vec<_> = store
            .featured()
            .into_iter()
            .map(|i| i.id.into_inner())
            .collect();
        assert!(featured.contains(&"me-lo-merezco".to_string()));
        assert!(featured.contains(&"wrap-pollo".to_string()));
        assert!(!featured.contains(&"chipa-prensado".to_string()));
    }

    #[test]
    fn test_resolve_default_category() {
        let id = ProductId::parse("torta-oreo").unwrap();
        assert_eq!(
            CatalogStore::resolve_default_category(&id, "Torta Oreo"),
            Category::Desserts
        );
    }
}
