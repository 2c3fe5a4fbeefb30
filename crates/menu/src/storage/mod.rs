//! String-keyed persistent store.
//!
//! Every piece of menu state is kept as a JSON blob under a fixed key, the
//! way a browser keeps it in local storage. Two backends are provided:
//!
//! - [`MemoryStorage`] - process-local map, used in tests and ephemeral sessions
//! - [`FileStorage`] - one file per key under a data directory
//!
//! There is a single writer per store; two processes sharing a directory
//! race with last-write-wins semantics.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Errors raised by a storage backend.
///
/// Stores treat every variant as "data absent" on read and log it on write.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend cannot be used at all.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The key is not accepted by the backend.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// Filesystem operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A string-keyed, string-valued persistent store.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Keys used for persisted menu state.
pub mod keys {
    /// JSON array of menu items.
    pub const PRODUCTS: &str = "products";

    /// Version tag of the catalog snapshot stored under [`PRODUCTS`].
    pub const PRODUCTS_VERSION: &str = "products_version";

    /// JSON array of cart entries.
    pub const CART: &str = "cart";

    /// Local user and role flag.
    pub const CURRENT_USER: &str = "current_user";
}
