use serde::{Deserialize, Serialize};

use stockroom_inventory::InventoryStore;

/// A product currently below its configured minimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowStockAlert {
    pub product: String,
    pub stock_level: i64,
    pub min_stock_level: i64,
    pub location: String,
}

/// Replenishment alerts, in catalog order.
pub fn low_stock_alerts(store: &InventoryStore) -> Vec<LowStockAlert> {
    store
        .products()
        .iter()
        .filter(|p| p.below_threshold())
        .map(|p| LowStockAlert {
            product: p.name().to_string(),
            stock_level: p.stock_level(),
            min_stock_level: p.min_stock_level(),
            location: p.location().to_string(),
        })
        .collect()
}
