//! Movement submission engine.
//!
//! `InventoryEngine` owns the store and the ledger and orchestrates the
//! request pipeline: validate, apply, append. It is the only write path;
//! everything else reads snapshots.

pub mod engine;

pub use engine::InventoryEngine;
