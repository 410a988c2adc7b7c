//! Append-only movement ledger.

use serde::{Deserialize, Serialize};

use stockroom_core::{StockError, StockResult};

use crate::movement::{Direction, MovementRecord, MovementType};

/// Conjunctive query filter. A `None` field matches everything (the UI's
/// `"All"` selector maps to `None`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementFilter {
    pub product: Option<String>,
    pub movement_type: Option<MovementType>,
}

impl MovementFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_product(product: impl Into<String>) -> Self {
        Self {
            product: Some(product.into()),
            movement_type: None,
        }
    }

    pub fn for_type(movement_type: MovementType) -> Self {
        Self {
            product: None,
            movement_type: Some(movement_type),
        }
    }

    pub fn with_type(mut self, movement_type: MovementType) -> Self {
        self.movement_type = Some(movement_type);
        self
    }

    fn matches(&self, record: &MovementRecord) -> bool {
        if let Some(product) = &self.product {
            if record.product != *product {
                return false;
            }
        }
        if let Some(movement_type) = self.movement_type {
            if record.movement_type != movement_type {
                return false;
            }
        }
        true
    }
}

/// Ordered, append-only history of accepted movements.
///
/// Records are never mutated or deleted; the ledger only grows. Replaying
/// it against the seed catalog reproduces the store's current stock levels
/// exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementLedger {
    records: Vec<MovementRecord>,
}

impl MovementLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an accepted movement. O(1) amortized, insertion order.
    ///
    /// The malformed-record checks are defensive: records built by the
    /// engine from a validated movement cannot trip them.
    pub fn append(&mut self, record: MovementRecord) -> StockResult<()> {
        if record.quantity_change == 0 {
            return Err(StockError::invariant("ledger record has zero delta"));
        }
        let sign_ok = match record.movement_type.direction() {
            Direction::Inbound => record.quantity_change > 0,
            Direction::Outbound => record.quantity_change < 0,
        };
        if !sign_ok {
            return Err(StockError::invariant(format!(
                "ledger record sign does not match {} direction",
                record.movement_type
            )));
        }

        self.records.push(record);
        Ok(())
    }

    /// Lazy filtered view, in append order.
    ///
    /// Restartable: re-evaluating the same filter against an unchanged
    /// ledger yields an identical sequence.
    pub fn query<'a>(
        &'a self,
        filter: &'a MovementFilter,
    ) -> impl Iterator<Item = &'a MovementRecord> {
        self.records.iter().filter(|record| filter.matches(record))
    }

    /// Full history in append order.
    pub fn records(&self) -> &[MovementRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
