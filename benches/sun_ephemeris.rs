use chrono::{DateTime, Duration, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use solar_ephemeris::{
    sun_events, sun_events_from_julian, sun_position, sun_position_from_julian, JulianDay,
};
use std::hint::black_box;

fn benchmark_single_calculation(c: &mut Criterion) {
    let datetime = "2023-06-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let jd = JulianDay::from_datetime(&datetime);
    let lat = 37.7749;
    let lon = -122.4194;

    c.bench_function("position_single", |b| {
        b.iter(|| sun_position(black_box(datetime), black_box(lat), black_box(lon)).unwrap())
    });

    c.bench_function("position_single_julian", |b| {
        b.iter(|| sun_position_from_julian(black_box(jd), black_box(lat), black_box(lon)).unwrap())
    });

    c.bench_function("events_single", |b| {
        b.iter(|| sun_events(black_box(datetime), black_box(lat), black_box(lon)).unwrap())
    });

    c.bench_function("events_single_julian", |b| {
        b.iter(|| sun_events_from_julian(black_box(jd), black_box(lat), black_box(lon)).unwrap())
    });
}

fn benchmark_position_time_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("position_time_series");

    let base_datetime = "2023-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let lat = 37.7749;
    let lon = -122.4194;

    for &count in &[1_000, 10_000] {
        group.throughput(Throughput::Elements(count));

        let datetimes: Vec<DateTime<Utc>> = (0..count)
            .map(|i| base_datetime + Duration::hours(i as i64))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                for &dt in &datetimes {
                    let _result =
                        sun_position(black_box(dt), black_box(lat), black_box(lon)).unwrap();
                }
            })
        });
    }

    group.finish();
}

fn benchmark_event_tables_for_a_year(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_tables_for_a_year");
    group.throughput(Throughput::Elements(365));

    let base_datetime = "2023-01-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let days: Vec<DateTime<Utc>> = (0..365)
        .map(|i| base_datetime + Duration::days(i))
        .collect();

    // mid and high latitude, the latter exercising the polar branches
    for &(name, lat, lon) in &[("london", 51.5074, -0.1278), ("tromso", 69.6492, 18.9553)] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &name, |b, _| {
            b.iter(|| {
                for &dt in &days {
                    let _result =
                        sun_events(black_box(dt), black_box(lat), black_box(lon)).unwrap();
                }
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_calculation,
    benchmark_position_time_series,
    benchmark_event_tables_for_a_year
);

criterion_main!(benches);
