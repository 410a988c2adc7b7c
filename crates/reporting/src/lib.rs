//! Read-only reporting over a stock snapshot.
//!
//! Alerts and forecasts are disposable derivations: they hold no state of
//! their own and can be recomputed from the store at any time. Nothing in
//! this crate mutates inventory.

pub mod alerts;
pub mod forecast;

pub use alerts::{low_stock_alerts, LowStockAlert};
pub use forecast::{forecast_table, forecasted_level, ForecastRow, MAX_FORECAST_DAYS};
