//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type StockResult<T> = Result<T, StockError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (rejected
/// movements, seed validation, invariants). Infrastructure concerns belong
/// elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    /// Movement quantity was not a positive integer.
    #[error("invalid quantity: {0} (must be >= 1)")]
    InvalidQuantity(i64),

    /// An outbound movement asked for more units than are on hand.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i64, available: i64 },

    /// A discrepancy movement was submitted without a recognized reason.
    #[error("invalid discrepancy reason: {0}")]
    InvalidReason(String),

    /// The named product is not in the catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(String),

    /// A delta would have driven a stock level below zero.
    ///
    /// Defensive: the validator rejects such movements before the store is
    /// touched, so the engine never surfaces this variant directly.
    #[error("negative stock violation for {product}: {current} + {delta} < 0")]
    NegativeStockViolation {
        product: String,
        current: i64,
        delta: i64,
    },

    /// Validator and store disagreed. Fatal: indicates a logic bug, not a
    /// user-input problem. Not retried.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A value failed validation (e.g. malformed catalog seed data).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl StockError {
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unknown_product(name: impl Into<String>) -> Self {
        Self::UnknownProduct(name.into())
    }

    pub fn invalid_reason(raw: impl Into<String>) -> Self {
        Self::InvalidReason(raw.into())
    }

    /// True only for errors that signal a programming error rather than bad
    /// input. Callers may re-prompt on everything else.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InvariantViolation(_))
    }
}
