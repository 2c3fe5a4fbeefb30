//! Integration tests for the La Capke menu.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p lacapke-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_lifecycle` - version gate, recovery and edits against the file store
//! - `cart_orders` - merge-on-add and totals across store instances
//! - `storefront_flow` - admin gating, ordering rules and navigation
//!
//! Every test gets its own scratch directory through [`TestContext`], so
//! "restarting the app" means building new stores over the same directory.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use lacapke_menu::{
    CartStore, CatalogStore, FileStorage, KeyValueStore, MenuConfig, Recorder, Session,
    StorageError, Storefront,
};
use tempfile::TempDir;

/// A scratch data directory plus the collaborators a session needs.
pub struct TestContext {
    dir: TempDir,
    pub recorder: Arc<Recorder>,
}

impl TestContext {
    /// Create an empty data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created.
    pub fn new() -> Result<Self, StorageError> {
        Ok(Self {
            dir: TempDir::new()?,
            recorder: Arc::new(Recorder::new()),
        })
    }

    /// Open a fresh file store over the scratch directory, as a restarted
    /// app would.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be opened.
    pub fn storage(&self) -> Result<Arc<dyn KeyValueStore>, StorageError> {
        Ok(Arc::new(FileStorage::open(self.dir.path())?))
    }

    /// Catalog store with the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be opened.
    pub fn catalog(&self) -> Result<CatalogStore, StorageError> {
        Ok(CatalogStore::new(self.storage()?))
    }

    /// Catalog store with a custom default list and version.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be opened.
    pub fn catalog_with(
        &self,
        defaults: Vec<lacapke_core::MenuItem>,
        version: &str,
    ) -> Result<CatalogStore, StorageError> {
        Ok(CatalogStore::with_defaults(self.storage()?, defaults, version))
    }

    /// Cart store.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be opened.
    pub fn cart(&self) -> Result<CartStore, StorageError> {
        Ok(CartStore::new(self.storage()?))
    }

    /// Storefront wired to the shared [`Recorder`].
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be opened.
    pub fn storefront(&self) -> Result<Storefront, StorageError> {
        let config = MenuConfig::default();
        let storage = self.storage()?;
        Ok(Storefront::from_parts(
            CatalogStore::new(storage.clone()),
            CartStore::new(storage.clone()),
            Session::new(storage, config.admin_username),
            self.recorder.clone(),
            self.recorder.clone(),
        ))
    }
}
