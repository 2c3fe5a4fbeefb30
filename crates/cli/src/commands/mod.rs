//! Subcommand handlers. Each drives the [`Storefront`](lacapke_menu::Storefront)
//! and hands the result to [`crate::output`] for printing.

pub mod admin;
pub mod cart;
pub mod menu;
pub mod session;
