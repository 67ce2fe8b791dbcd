// Benchmark for countdown calculations
// Measures the per-year occurrence scan and the next-occurrence breakdown

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use birthday_tribute::models::anniversary::AnniversaryDate;
use birthday_tribute::services::countdown::{count_occurrences, time_until_next};
use chrono::{Duration, NaiveDate, TimeZone, Utc};

fn bench_count_occurrences(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_occurrences");
    let anniversary = AnniversaryDate::new(10, 4).unwrap();

    for years in [10, 100, 1000].iter() {
        let first_observed = NaiveDate::from_ymd_opt(1000, 10, 4).unwrap();
        let today = first_observed + Duration::days(*years as i64 * 365);
        group.bench_with_input(BenchmarkId::from_parameter(years), years, |b, _| {
            b.iter(|| {
                count_occurrences(
                    black_box(anniversary),
                    black_box(first_observed),
                    black_box(today),
                )
            });
        });
    }

    group.finish();
}

fn bench_time_until_next(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_until_next");
    let now = Utc.with_ymd_and_hms(2026, 8, 28, 12, 0, 0).unwrap();

    let october = AnniversaryDate::new(10, 4).unwrap();
    group.bench_function("common_date", |b| {
        b.iter(|| time_until_next(black_box(october), black_box(&now)));
    });

    // Worst case: a leap-day anniversary scans several candidate years.
    let leap_day = AnniversaryDate::new(2, 29).unwrap();
    group.bench_function("leap_day", |b| {
        b.iter(|| time_until_next(black_box(leap_day), black_box(&now)));
    });

    group.finish();
}

criterion_group!(benches, bench_count_occurrences, bench_time_until_next);
criterion_main!(benches);
