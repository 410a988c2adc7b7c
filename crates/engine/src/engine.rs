//! Movement execution pipeline (application-level orchestration).
//!
//! Each request runs the full lifecycle before the next is accepted:
//!
//! ```text
//! Request
//!   ↓
//! 1. Look up current stock (tenantless, single catalog)
//!   ↓
//! 2. Validate (pure decision logic, resolves signed delta + reason)
//!   ↓
//! 3. Apply delta to the store (single mutation point)
//!   ↓
//! 4. Append the record to the ledger (append-only audit trail)
//! ```
//!
//! Validation and application are atomic as a pair: a rejection leaves both
//! the store and the ledger untouched, and an accepted movement updates
//! both. There is no rollback after step 3; step 4 cannot fail for a record
//! built from a validated movement.
//!
//! The engine is single-threaded by design. A concurrent host must
//! serialize calls to [`InventoryEngine::submit_movement`] spanning
//! validation through ledger append.

use chrono::Utc;

use stockroom_core::{MovementId, StockError, StockResult};
use stockroom_inventory::{CatalogEntry, InventoryStore};
use stockroom_movements::{MovementLedger, MovementRecord, MovementRequest, validate};

/// Owns the authoritative stock state and its audit trail.
///
/// Explicitly constructed and passed by handle; no ambient globals. One
/// engine per process.
#[derive(Debug, Clone)]
pub struct InventoryEngine {
    store: InventoryStore,
    ledger: MovementLedger,
}

impl InventoryEngine {
    /// Build an engine over a seed catalog. The catalog is consumed once;
    /// products cannot be added or removed afterwards.
    pub fn from_catalog(entries: impl IntoIterator<Item = CatalogEntry>) -> StockResult<Self> {
        Ok(Self {
            store: InventoryStore::from_catalog(entries)?,
            ledger: MovementLedger::new(),
        })
    }

    /// Submit one movement request.
    ///
    /// On acceptance, the store is updated, a record is appended to the
    /// ledger, and the record is returned. On rejection, nothing changes
    /// and the typed reason is returned; the caller may re-prompt.
    ///
    /// A store failure after successful validation means validator and
    /// store disagree. That is a programming error: it surfaces as the
    /// fatal [`StockError::InvariantViolation`] and is not retried.
    pub fn submit_movement(&mut self, request: MovementRequest) -> StockResult<MovementRecord> {
        let current = self.store.stock_level(&request.product).inspect_err(|e| {
            tracing::warn!(product = %request.product, error = %e, "movement rejected");
        })?;

        let resolved = match validate(&request, current) {
            Ok(resolved) => resolved,
            Err(reason) => {
                tracing::warn!(
                    product = %request.product,
                    movement_type = %request.movement_type,
                    quantity = request.quantity,
                    reason = %reason,
                    "movement rejected"
                );
                return Err(reason);
            }
        };

        // Commit point. The validator has already bounded outbound deltas by
        // current stock, so a failure here is a validator/store disagreement.
        let new_level = self
            .store
            .apply_delta(&request.product, resolved.signed_delta)
            .map_err(|e| {
                StockError::invariant(format!(
                    "validated delta refused by store for {}: {e}",
                    request.product
                ))
            })?;

        let record = MovementRecord {
            id: MovementId::new(),
            product: request.product,
            quantity_change: resolved.signed_delta,
            reason: resolved.reason,
            movement_type: request.movement_type,
            occurred_at: Utc::now(),
        };

        self.ledger.append(record.clone()).map_err(|e| {
            StockError::invariant(format!("ledger refused a validated record: {e}"))
        })?;

        tracing::info!(
            movement_id = %record.id,
            product = %record.product,
            movement_type = %record.movement_type,
            quantity_change = record.quantity_change,
            new_level,
            "movement accepted"
        );

        Ok(record)
    }

    /// Read-only snapshot of the stock state (for display/forecast
    /// collaborators).
    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    /// Read-only view of the audit trail.
    pub fn ledger(&self) -> &MovementLedger {
        &self.ledger
    }
}
