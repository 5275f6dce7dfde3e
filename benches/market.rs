//! benches/market.rs
//! Run with:  cargo bench --bench market
//! HTML:      target/criterion/report/index.html

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use stock_trader::{Market, Portfolio};

// ────────────────────────────────────────────────────────────────────────────
//  Parameter grids
// ────────────────────────────────────────────────────────────────────────────
const UNIVERSE_SIZES: &[usize] = &[3, 100, 10_000];

/// A seeded market with `n` synthetic tickers priced 10..1009.
fn setup_market(n: usize) -> Market {
    let mut market = Market::seeded(42);
    for i in 0..n {
        market.add(format!("SYM{i}"), format!("Company {i}"), 10.0 + (i % 1000) as f64);
    }
    market
}

pub fn bench_update_prices(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_prices");

    for &n in UNIVERSE_SIZES {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter_batched(
                || setup_market(n),
                |mut market| {
                    market.update_prices();
                    black_box(market);
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

pub fn bench_round_trip(c: &mut Criterion) {
    let market = setup_market(100);
    c.bench_function("buy_then_sell", |b| {
        b.iter_batched(
            || Portfolio::new(1_000_000.0),
            |mut pf| {
                let _ = pf.buy(&market, black_box("SYM7"), 50);
                let _ = pf.sell(&market, black_box("SYM7"), 50);
                black_box(pf);
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_update_prices, bench_round_trip);
criterion_main!(benches);
