//! La Capke Core - Shared menu types.
//!
//! This crate provides the domain types used across all La Capke components:
//! - `menu` - Catalog and cart stores plus the view binding layer
//! - `cli` - Terminal front-end for browsing, ordering and editing the menu
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no persistence, no logging.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product ids, prices, categories, menu items, cart entries and roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
