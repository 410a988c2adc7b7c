//! Inventory catalog and stock levels.
//!
//! This crate contains the authoritative stock state per product, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). Stock
//! levels are mutated through a single point (`InventoryStore::apply_delta`);
//! everything else is read-only.

pub mod product;
pub mod store;

pub use product::{CatalogEntry, Product};
pub use store::InventoryStore;
