//! La Capke Menu library.
//!
//! Owns the menu's client-side state: the product catalog, the visitor's
//! cart and the local admin flag, all persisted to a string-keyed store.
//!
//! # Architecture
//!
//! - [`storage`] - `KeyValueStore` trait with in-memory and file backends
//! - [`catalog`] - Catalog store, default menu and category classifier
//! - [`cart`] - Cart store with merge-on-add lines
//! - [`images`] - Allow-list image resolver
//! - [`session`] - Local role flag that unlocks editing
//! - [`notify`] - Notification and navigation collaborator traits
//! - [`storefront`] - View binding layer wiring the above together
//!
//! Stores never fail on bad persisted data: corrupt or stale snapshots are
//! replaced by defaults and the path taken is reported as a [`LoadSource`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod images;
pub mod notify;
pub mod session;
pub mod storage;
pub mod storefront;

pub use cart::{CartLoad, CartStore};
pub use catalog::{CATALOG_VERSION, CatalogError, CatalogLoad, CatalogStore, LoadSource};
pub use config::MenuConfig;
pub use error::{MenuError, Result};
pub use images::{DEFAULT_IMAGE, resolve_image};
pub use notify::{
    Level, LogNavigator, Navigator, Notification, Notifier, Recorder, Route, TracingNotifier,
};
pub use session::{CurrentUser, Session};
pub use storage::{FileStorage, KeyValueStore, MemoryStorage, StorageError};
pub use storefront::{AddToCart, CartSummary, MenuPage, MenuSection, ProductView, Storefront};
