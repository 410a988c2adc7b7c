//! Proportional-decay stock forecast.
//!
//! Not a statistical model: a fixed 10%-of-current-stock daily decay,
//! floored at zero. The fractional-rate formula is authoritative; an older
//! revision of the dashboard used integer floor division
//! (`stock - stock / 10 * days`) and produces different output for stock
//! not divisible by 10.

use serde::{Deserialize, Serialize};

use stockroom_inventory::InventoryStore;

/// Upper bound of the forecast horizon selector (days).
pub const MAX_FORECAST_DAYS: u32 = 30;

/// Forecast line for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    pub product: String,
    pub stock_level: i64,
    pub forecasted_level: f64,
}

/// `max(0, stock - stock * 0.1 * days)`.
pub fn forecasted_level(stock_level: i64, days: u32) -> f64 {
    let stock = stock_level as f64;
    (stock - stock * 0.1 * f64::from(days)).max(0.0)
}

/// Forecast over the whole catalog, in catalog order. `days` is clamped to
/// the selector range `1..=MAX_FORECAST_DAYS`.
pub fn forecast_table(store: &InventoryStore, days: u32) -> Vec<ForecastRow> {
    let days = days.clamp(1, MAX_FORECAST_DAYS);
    store
        .products()
        .iter()
        .map(|p| ForecastRow {
            product: p.name().to_string(),
            stock_level: p.stock_level(),
            forecasted_level: forecasted_level(p.stock_level(), days),
        })
        .collect()
}
