use std::collections::HashMap;

use stockroom_core::{StockError, StockResult};

use crate::product::{CatalogEntry, Product};

/// Authoritative stock state for the whole catalog.
///
/// Products live in a `Vec` so `products()` preserves catalog insertion
/// order; a name index sits alongside for lookups. The only mutation path
/// is [`InventoryStore::apply_delta`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryStore {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl InventoryStore {
    /// Seed the store from catalog data. Consumed once at construction;
    /// there are no product create/delete operations afterwards.
    pub fn from_catalog(entries: impl IntoIterator<Item = CatalogEntry>) -> StockResult<Self> {
        let mut products = Vec::new();
        let mut index = HashMap::new();

        for entry in entries {
            if entry.name.trim().is_empty() {
                return Err(StockError::validation("product name cannot be empty"));
            }
            if entry.initial_stock_level < 0 {
                return Err(StockError::validation(format!(
                    "initial stock for {} cannot be negative",
                    entry.name
                )));
            }
            if entry.min_stock_level < 0 {
                return Err(StockError::validation(format!(
                    "min stock for {} cannot be negative",
                    entry.name
                )));
            }
            if index.contains_key(&entry.name) {
                return Err(StockError::validation(format!(
                    "duplicate product in catalog: {}",
                    entry.name
                )));
            }

            index.insert(entry.name.clone(), products.len());
            products.push(Product::from_entry(entry));
        }

        Ok(Self { products, index })
    }

    /// Current stock level for one product.
    pub fn stock_level(&self, product: &str) -> StockResult<i64> {
        self.get(product).map(Product::stock_level)
    }

    /// Apply a signed delta to one product's stock level.
    ///
    /// This is the single mutation point for stock. The non-negativity
    /// invariant is enforced here even though the validator already rejects
    /// over-draws; never trust the caller alone.
    pub fn apply_delta(&mut self, product: &str, delta: i64) -> StockResult<i64> {
        let idx = *self
            .index
            .get(product)
            .ok_or_else(|| StockError::unknown_product(product))?;

        let current = self.products[idx].stock_level();
        let new_level = current
            .checked_add(delta)
            .ok_or_else(|| StockError::invariant("stock level arithmetic overflow"))?;

        if new_level < 0 {
            return Err(StockError::NegativeStockViolation {
                product: product.to_string(),
                current,
                delta,
            });
        }

        self.products[idx].set_stock_level(new_level);
        Ok(new_level)
    }

    /// Read-only snapshot in catalog insertion order (stable).
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Threshold alert: `stock_level < min_stock_level`.
    pub fn below_threshold(&self, product: &str) -> StockResult<bool> {
        self.get(product).map(Product::below_threshold)
    }

    pub fn contains(&self, product: &str) -> bool {
        self.index.contains_key(product)
    }

    fn get(&self, product: &str) -> StockResult<&Product> {
        self.index
            .get(product)
            .map(|&idx| &self.products[idx])
            .ok_or_else(|| StockError::unknown_product(product))
    }
}
