use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{MovementId, StockError};

/// Whether a movement type adds to or removes from stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Inbound,
    Outbound,
}

/// Classification of a stock movement. Every variant carries a fixed
/// direction; `StockAdjustment` is deliberately inbound-only (bidirectional
/// adjustments would need a separate signed-quantity input, which this
/// system does not have).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    Restocking,
    ReturnedGoods,
    StockAdjustment,
    Sales,
    Damaged,
    Discrepancy,
    Transfer,
}

impl MovementType {
    pub fn direction(&self) -> Direction {
        match self {
            MovementType::Restocking
            | MovementType::ReturnedGoods
            | MovementType::StockAdjustment => Direction::Inbound,
            MovementType::Sales
            | MovementType::Damaged
            | MovementType::Discrepancy
            | MovementType::Transfer => Direction::Outbound,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MovementType::Restocking => "Restocking",
            MovementType::ReturnedGoods => "Returned Goods",
            MovementType::StockAdjustment => "Stock Adjustment",
            MovementType::Sales => "Sales",
            MovementType::Damaged => "Damaged",
            MovementType::Discrepancy => "Discrepancy",
            MovementType::Transfer => "Transfer",
        }
    }

    /// Reason recorded when the request does not carry one. Restocking gets
    /// its own wording; every other type falls back to its label.
    /// (`Discrepancy` never uses this: its reason is mandatory.)
    pub fn default_reason(&self) -> &'static str {
        match self {
            MovementType::Restocking => "New Stock Arrival",
            other => other.label(),
        }
    }

    /// All variants, in the order the selector UI presents them.
    pub const ALL: [MovementType; 7] = [
        MovementType::Restocking,
        MovementType::ReturnedGoods,
        MovementType::StockAdjustment,
        MovementType::Sales,
        MovementType::Damaged,
        MovementType::Discrepancy,
        MovementType::Transfer,
    ];
}

impl core::fmt::Display for MovementType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Closed set of reasons a discrepancy movement may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscrepancyReason {
    MissingItems,
    Miscount,
    SlotAdjustment,
}

impl DiscrepancyReason {
    pub fn label(&self) -> &'static str {
        match self {
            DiscrepancyReason::MissingItems => "Missing Items",
            DiscrepancyReason::Miscount => "Miscount",
            DiscrepancyReason::SlotAdjustment => "Slot Adjustment",
        }
    }

    pub const ALL: [DiscrepancyReason; 3] = [
        DiscrepancyReason::MissingItems,
        DiscrepancyReason::Miscount,
        DiscrepancyReason::SlotAdjustment,
    ];
}

impl core::fmt::Display for DiscrepancyReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DiscrepancyReason {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Missing Items" => Ok(DiscrepancyReason::MissingItems),
            "Miscount" => Ok(DiscrepancyReason::Miscount),
            "Slot Adjustment" => Ok(DiscrepancyReason::SlotAdjustment),
            other => Err(StockError::invalid_reason(other)),
        }
    }
}

/// A requested stock change, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementRequest {
    pub product: String,
    pub movement_type: MovementType,
    /// Unsigned magnitude as entered; the validator resolves the sign.
    pub quantity: i64,
    /// Required for `Discrepancy`, ignored for every other type.
    pub reason: Option<DiscrepancyReason>,
}

impl MovementRequest {
    pub fn new(product: impl Into<String>, movement_type: MovementType, quantity: i64) -> Self {
        Self {
            product: product.into(),
            movement_type,
            quantity,
            reason: None,
        }
    }

    pub fn with_reason(mut self, reason: DiscrepancyReason) -> Self {
        self.reason = Some(reason);
        self
    }
}

/// An accepted movement, as recorded in the ledger.
///
/// Immutable fact: created exactly once per accepted request, never mutated
/// or deleted. The full sequence of records is the exact derivation history
/// of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementRecord {
    pub id: MovementId,
    pub product: String,
    /// Signed delta actually applied to the stock level.
    pub quantity_change: i64,
    pub reason: String,
    pub movement_type: MovementType,
    pub occurred_at: DateTime<Utc>,
}
