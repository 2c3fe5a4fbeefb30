//! Cart store: the visitor's order lines.
//!
//! The cart is persisted under [`keys::CART`] and re-read on every access, so
//! each view sees the latest lines. The store also keeps the last lines it
//! saw; when storage cannot be read, that list stands in for the persisted
//! one. At most one line exists per
//! `(id, variant)` pair; adding the same pair again grows its quantity.
//! Clearing the cart belongs to checkout and is not offered here.

use std::sync::{Arc, Mutex};

use lacapke_core::{CartEntry, Price};

use crate::catalog::LoadSource;
use crate::storage::{KeyValueStore, keys};

/// Result of reading the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLoad {
    pub entries: Vec<CartEntry>,
    pub source: LoadSource,
}

/// Owns the cart for one session.
#[derive(Clone)]
pub struct CartStore {
    storage: Arc<dyn KeyValueStore>,
    entries: Arc<Mutex<Vec<CartEntry>>>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("entries", &self.cached().len())
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Create a store backed by `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            entries: Arc::default(),
        }
    }

    /// Read the persisted cart.
    ///
    /// Missing data is an empty cart ([`LoadSource::Reset`]). Unparsable data
    /// is logged and read as empty ([`LoadSource::Recovered`]). When storage
    /// cannot be read at all, the lines this store last held are returned
    /// (also [`LoadSource::Recovered`]). Lines with zero quantity are dropped
    /// and repeated `(id, variant)` pairs merged.
    #[must_use]
    pub fn load(&self) -> CartLoad {
        let load = match self.storage.get(keys::CART) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartEntry>>(&raw) {
                Ok(stored) => CartLoad {
                    entries: stored.into_iter().fold(Vec::new(), merge_line),
                    source: LoadSource::Loaded,
                },
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to parse cart, treating as empty");
                    CartLoad {
                        entries: Vec::new(),
                        source: LoadSource::Recovered,
                    }
                }
            },
            Ok(None) => CartLoad {
                entries: Vec::new(),
                source: LoadSource::Reset,
            },
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read cart, using last known lines");
                return CartLoad {
                    entries: self.cached(),
                    source: LoadSource::Recovered,
                };
            }
        };

        self.remember(&load.entries);
        load
    }

    /// Current cart lines.
    #[must_use]
    pub fn get_all(&self) -> Vec<CartEntry> {
        self.load().entries
    }

    /// Add a line, merging it into an existing line for the same
    /// `(id, variant)` pair. A zero-quantity line changes nothing.
    pub fn add_item(&self, entry: CartEntry) -> Vec<CartEntry> {
        let entries = self.get_all();
        if entry.quantity == 0 {
            tracing::debug!(id = %entry.id, "Ignoring zero-quantity cart line");
            return entries;
        }

        tracing::debug!(
            id = %entry.id,
            variant = entry.variant.as_deref().unwrap_or(""),
            quantity = entry.quantity,
            "Adding to cart"
        );
        let entries = merge_line(entries, entry);
        self.remember(&entries);
        self.persist(&entries);
        entries
    }

    /// Sum of all quantities, for the cart badge.
    #[must_use]
    pub fn total_count(entries: &[CartEntry]) -> u32 {
        entries
            .iter()
            .fold(0u32, |sum, entry| sum.saturating_add(entry.quantity))
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(entries: &[CartEntry]) -> Price {
        entries
            .iter()
            .fold(Price::ZERO, |sum, entry| sum.saturating_add(entry.line_total()))
    }

    /// Badge text for a total count: empty when zero, `9+` above nine.
    #[must_use]
    pub fn badge_label(count: u32) -> String {
        match count {
            0 => String::new(),
            1..=9 => count.to_string(),
            _ => "9+".to_string(),
        }
    }

    fn cached(&self) -> Vec<CartEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    fn remember(&self, entries: &[CartEntry]) {
        if let Ok(mut cached) = self.entries.lock() {
            *cached = entries.to_vec();
        }
    }

    fn persist(&self, entries: &[CartEntry]) {
        match serde_json::to_string(entries) {
            Ok(json) => {
                if let Err(e) = self.storage.set(keys::CART, &json) {
                    tracing::warn!(error = %e, "Failed to persist cart");
                }
            }
            Err(e) => tracing::error!(error = %e, "Failed to serialize cart"),
        }
    }
}

/// Fold one line into `entries`, keeping at most one line per pair.
fn merge_line(mut entries: Vec<CartEntry>, entry: CartEntry) -> Vec<CartEntry> {
    if entry.quantity == 0 {
        return entries;
    }
    match entries.iter_mut().find(|existing| existing.same_line(&entry)) {
        Some(existing) => {
            existing.quantity = existing.quantity.saturating_add(entry.quantity);
        }
        None => entries.push(entry),
    }
    entries
}
