//! Query engine benchmarks over a synthetic county table.
//!
//! Run with: `cargo bench --package countypop-bench`

use countypop_bench::{DatasetConfig, synthetic_counties};
use countypop_query::{ClosestMatch, CountyQuery};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn query_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    for counties in [100, 3_200, 32_000] {
        let config = DatasetConfig {
            counties,
            ..Default::default()
        };
        let query = CountyQuery::new(synthetic_counties(&config));
        let year = query.for_year(2020).expect("synthetic data covers 2020");
        group.throughput(Throughput::Elements(query.len() as u64));
        group.bench_with_input(BenchmarkId::new("filter_by_year", counties), &query, |b, q| {
            b.iter(|| q.filter_by_year(black_box(2020)));
        });

        // Average and closest only scan the 2020 slice
        group.throughput(Throughput::Elements(year.len() as u64));
        group.bench_with_input(BenchmarkId::new("average", counties), &year, |b, q| {
            b.iter(|| q.average_population());
        });

        // Wide margin so the search always succeeds
        let options = ClosestMatch::new().with_max_abs_distance(1_000_000.0);
        group.bench_with_input(BenchmarkId::new("closest", counties), &year, |b, q| {
            b.iter(|| q.find_closest_by_population(black_box(options)).map(|r| r.slug().len()));
        });
    }

    group.finish();
}

criterion_group!(benches, query_benchmark);
criterion_main!(benches);
