use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use stockroom_engine::InventoryEngine;
use stockroom_inventory::CatalogEntry;
use stockroom_movements::{MovementRequest, MovementType};

fn bench_engine() -> InventoryEngine {
    InventoryEngine::from_catalog([
        CatalogEntry::new("T-Shirt", 1_000_000, 40, "A1"),
        CatalogEntry::new("Jeans", 1_000_000, 100, "B2"),
    ])
    .expect("bench catalog is valid")
}

fn bench_submit_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("submit_movement");
    group.throughput(Throughput::Elements(1));

    group.bench_function("accepted_sale", |b| {
        let mut engine = bench_engine();
        b.iter(|| {
            // Alternate sale/restock so stock stays bounded over long runs.
            engine
                .submit_movement(black_box(MovementRequest::new(
                    "T-Shirt",
                    MovementType::Sales,
                    1,
                )))
                .unwrap();
            engine
                .submit_movement(black_box(MovementRequest::new(
                    "T-Shirt",
                    MovementType::Restocking,
                    1,
                )))
                .unwrap();
        })
    });

    group.bench_function("rejected_oversell", |b| {
        let mut engine = bench_engine();
        b.iter(|| {
            let _ = engine.submit_movement(black_box(MovementRequest::new(
                "Jeans",
                MovementType::Sales,
                i64::MAX / 2,
            )));
        })
    });

    group.finish();
}

fn bench_ledger_query(c: &mut Criterion) {
    let mut engine = bench_engine();
    for _ in 0..10_000 {
        engine
            .submit_movement(MovementRequest::new("Jeans", MovementType::Sales, 1))
            .unwrap();
    }

    c.bench_function("query_10k_by_type", |b| {
        let filter = stockroom_movements::MovementFilter::for_type(MovementType::Sales);
        b.iter(|| {
            let count = engine.ledger().query(black_box(&filter)).count();
            black_box(count)
        })
    });
}

criterion_group!(benches, bench_submit_throughput, bench_ledger_query);
criterion_main!(benches);
