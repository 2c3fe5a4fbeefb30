//! Core types for La Capke.
//!
//! This module provides type-safe wrappers for the menu domain.

pub mod cart;
pub mod category;
pub mod id;
pub mod item;
pub mod price;
pub mod role;

pub use cart::CartEntry;
pub use category::{Category, UnknownCategory};
pub use id::{ProductId, ProductIdError};
pub use item::{MenuItem, MenuItemDraft, Variant};
pub use price::Price;
pub use role::Role;
