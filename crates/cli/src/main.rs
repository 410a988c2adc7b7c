//! Terminal demo: seeds the sample catalog, runs a few movements through
//! the engine, and prints the snapshot, ledger, alerts and a forecast.
//!
//! This is the presentation collaborator, reduced to read calls; all
//! writes go through `InventoryEngine::submit_movement`.

use anyhow::Context;

use stockroom_engine::InventoryEngine;
use stockroom_inventory::CatalogEntry;
use stockroom_movements::{DiscrepancyReason, MovementFilter, MovementRequest, MovementType};
use stockroom_reporting::{forecast_table, low_stock_alerts};

const FORECAST_DAYS: u32 = 7;

fn sample_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("T-Shirt", 50, 40, "A1"),
        CatalogEntry::new("Jeans", 200, 100, "B2"),
        CatalogEntry::new("Jacket", 30, 20, "C3"),
        CatalogEntry::new("Shoes", 100, 50, "D4"),
        CatalogEntry::new("Hat", 75, 60, "E5"),
    ]
}

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let mut engine =
        InventoryEngine::from_catalog(sample_catalog()).context("failed to seed catalog")?;

    let requests = vec![
        MovementRequest::new("T-Shirt", MovementType::Sales, 30),
        MovementRequest::new("Jacket", MovementType::Restocking, 10),
        MovementRequest::new("Jeans", MovementType::Discrepancy, 5)
            .with_reason(DiscrepancyReason::Miscount),
        MovementRequest::new("Hat", MovementType::Transfer, 20),
        // Over-draw: rejected, logged, and otherwise without effect.
        MovementRequest::new("Shoes", MovementType::Sales, 500),
    ];

    for request in requests {
        // Rejections are expected in the demo; the engine already logs them.
        let _ = engine.submit_movement(request);
    }

    println!("\nCurrent Stock Overview");
    println!("{:<10} {:>7} {:>5}  {}", "Product", "Stock", "Min", "Location");
    for product in engine.store().products() {
        println!(
            "{:<10} {:>7} {:>5}  {}",
            product.name(),
            product.stock_level(),
            product.min_stock_level(),
            product.location()
        );
    }

    println!("\nMovement History");
    for record in engine.ledger().query(&MovementFilter::all()) {
        println!(
            "{} {:<16} {:>5}  {} ({})",
            record.occurred_at.format("%Y-%m-%d %H:%M:%S"),
            record.product,
            record.quantity_change,
            record.movement_type,
            record.reason
        );
    }

    println!("\nStock Replenishment Alerts");
    let alerts = low_stock_alerts(engine.store());
    if alerts.is_empty() {
        println!("(none)");
    }
    for alert in alerts {
        println!(
            "{} is below the minimum stock level ({} < {})",
            alert.product, alert.stock_level, alert.min_stock_level
        );
    }

    println!("\nForecast ({FORECAST_DAYS} days)");
    for row in forecast_table(engine.store(), FORECAST_DAYS) {
        println!(
            "{:<10} {:>7} -> {:>9.1}",
            row.product, row.stock_level, row.forecasted_level
        );
    }

    Ok(())
}
