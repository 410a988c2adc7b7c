//! Stock movements: types, validation rules, and the append-only ledger.
//!
//! This crate contains the business rules for stock movements, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). The
//! validator decides accept/reject and resolves the signed delta; the ledger
//! records every accepted movement in order, forever.

pub mod ledger;
pub mod movement;
pub mod validator;

pub use ledger::{MovementFilter, MovementLedger};
pub use movement::{
    Direction, DiscrepancyReason, MovementRecord, MovementRequest, MovementType,
};
pub use validator::{ResolvedMovement, validate};
