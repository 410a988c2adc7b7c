//! Movement validation rules.
//!
//! Pure decision logic: given a request and the product's current stock,
//! either resolve the signed delta and reason, or reject with a typed
//! reason. No side effects; state mutation happens in the engine after a
//! successful validation.

use stockroom_core::{StockError, StockResult};

use crate::movement::{Direction, MovementRequest, MovementType};

/// Outcome of a successful validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMovement {
    /// Positive for inbound types, negative for outbound types.
    pub signed_delta: i64,
    /// Resolved audit reason (discrepancy reason label, "New Stock Arrival"
    /// for restocking, otherwise the type's own label).
    pub reason: String,
}

/// Validate a movement request against the current stock level.
///
/// Rules, in order:
/// 1. quantity must be >= 1;
/// 2. outbound movements may not remove more than is on hand (re-enforced
///    here even when a client pre-disables the submission affordance);
/// 3. discrepancies must carry a reason from the closed set;
/// 4. inbound movements have no upper bound.
pub fn validate(request: &MovementRequest, current_stock: i64) -> StockResult<ResolvedMovement> {
    if request.quantity < 1 {
        return Err(StockError::InvalidQuantity(request.quantity));
    }

    let insufficient = || StockError::InsufficientStock {
        requested: request.quantity,
        available: current_stock,
    };

    let reason = match request.movement_type {
        MovementType::Sales | MovementType::Damaged | MovementType::Transfer => {
            if request.quantity > current_stock {
                return Err(insufficient());
            }
            request.movement_type.default_reason().to_string()
        }
        MovementType::Discrepancy => {
            let Some(reason) = request.reason else {
                return Err(StockError::invalid_reason("<missing>"));
            };
            // Outbound like the three above; the reason check comes first so
            // an incomplete request is reported as such.
            if request.quantity > current_stock {
                return Err(insufficient());
            }
            reason.label().to_string()
        }
        inbound => inbound.default_reason().to_string(),
    };

    let signed_delta = match request.movement_type.direction() {
        Direction::Inbound => request.quantity,
        Direction::Outbound => -request.quantity,
    };

    Ok(ResolvedMovement {
        signed_delta,
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::DiscrepancyReason;
    use proptest::prelude::*;

    #[test]
    fn zero_and_negative_quantities_are_rejected() {
        for quantity in [0, -1, -50] {
            let req = MovementRequest::new("T-Shirt", MovementType::Restocking, quantity);
            assert_eq!(
                validate(&req, 50).unwrap_err(),
                StockError::InvalidQuantity(quantity)
            );
        }
    }

    #[test]
    fn outbound_over_current_stock_is_rejected() {
        let req = MovementRequest::new("T-Shirt", MovementType::Sales, 60);
        assert_eq!(
            validate(&req, 50).unwrap_err(),
            StockError::InsufficientStock {
                requested: 60,
                available: 50,
            }
        );
    }

    #[test]
    fn outbound_equal_to_current_stock_is_accepted() {
        let req = MovementRequest::new("T-Shirt", MovementType::Transfer, 50);
        let resolved = validate(&req, 50).unwrap();
        assert_eq!(resolved.signed_delta, -50);
        assert_eq!(resolved.reason, "Transfer");
    }

    #[test]
    fn inbound_has_no_upper_bound() {
        let req = MovementRequest::new("Jacket", MovementType::Restocking, 1_000_000);
        let resolved = validate(&req, 0).unwrap();
        assert_eq!(resolved.signed_delta, 1_000_000);
        assert_eq!(resolved.reason, "New Stock Arrival");
    }

    #[test]
    fn stock_adjustment_stays_inbound() {
        // Adjustments always increase stock; there is no signed-quantity
        // input that would make them bidirectional.
        let req = MovementRequest::new("Hat", MovementType::StockAdjustment, 5);
        assert_eq!(validate(&req, 0).unwrap().signed_delta, 5);
    }

    #[test]
    fn discrepancy_requires_a_reason() {
        let req = MovementRequest::new("Jeans", MovementType::Discrepancy, 3);
        assert!(matches!(
            validate(&req, 200).unwrap_err(),
            StockError::InvalidReason(_)
        ));
    }

    #[test]
    fn discrepancy_resolves_to_the_selected_reason() {
        let req = MovementRequest::new("Jeans", MovementType::Discrepancy, 5)
            .with_reason(DiscrepancyReason::Miscount);
        let resolved = validate(&req, 200).unwrap();
        assert_eq!(resolved.signed_delta, -5);
        assert_eq!(resolved.reason, "Miscount");
    }

    #[test]
    fn missing_reason_is_reported_before_insufficient_stock() {
        let req = MovementRequest::new("Jacket", MovementType::Discrepancy, 31);
        assert!(matches!(
            validate(&req, 30).unwrap_err(),
            StockError::InvalidReason(_)
        ));
    }

    #[test]
    fn discrepancy_is_bounded_by_current_stock() {
        let req = MovementRequest::new("Jacket", MovementType::Discrepancy, 31)
            .with_reason(DiscrepancyReason::MissingItems);
        assert!(matches!(
            validate(&req, 30).unwrap_err(),
            StockError::InsufficientStock { .. }
        ));
    }

    proptest! {
        /// Property: an accepted delta never exceeds current stock in the
        /// outbound direction, so applying it cannot go negative.
        #[test]
        fn accepted_delta_never_overdraws(
            quantity in 1i64..10_000,
            current in 0i64..10_000,
            type_idx in 0usize..MovementType::ALL.len(),
        ) {
            let movement_type = MovementType::ALL[type_idx];
            let mut req = MovementRequest::new("P", movement_type, quantity);
            if movement_type == MovementType::Discrepancy {
                req = req.with_reason(DiscrepancyReason::Miscount);
            }

            if let Ok(resolved) = validate(&req, current) {
                prop_assert!(current + resolved.signed_delta >= 0);
                prop_assert_eq!(resolved.signed_delta.unsigned_abs() as i64, quantity);
                match movement_type.direction() {
                    Direction::Inbound => prop_assert!(resolved.signed_delta > 0),
                    Direction::Outbound => prop_assert!(resolved.signed_delta < 0),
                }
            }
        }
    }
}
