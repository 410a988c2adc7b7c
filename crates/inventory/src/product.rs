use serde::{Deserialize, Serialize};

/// A product tracked by the inventory. Identity is the `name`.
///
/// Owned exclusively by [`crate::InventoryStore`]; stock is mutated only
/// through engine-approved movements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    stock_level: i64,
    min_stock_level: i64,
    location: String,
}

impl Product {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock_level(&self) -> i64 {
        self.stock_level
    }

    pub fn min_stock_level(&self) -> i64 {
        self.min_stock_level
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Threshold alert condition: current stock is strictly below the
    /// configured minimum.
    pub fn below_threshold(&self) -> bool {
        self.stock_level < self.min_stock_level
    }

    pub(crate) fn from_entry(entry: CatalogEntry) -> Self {
        Self {
            name: entry.name,
            stock_level: entry.initial_stock_level,
            min_stock_level: entry.min_stock_level,
            location: entry.location,
        }
    }

    pub(crate) fn set_stock_level(&mut self, level: i64) {
        self.stock_level = level;
    }
}

/// Catalog seed tuple, consumed once at store construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub initial_stock_level: i64,
    pub min_stock_level: i64,
    pub location: String,
}

impl CatalogEntry {
    pub fn new(
        name: impl Into<String>,
        initial_stock_level: i64,
        min_stock_level: i64,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            initial_stock_level,
            min_stock_level,
            location: location.into(),
        }
    }
}
