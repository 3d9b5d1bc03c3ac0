//! Benchmarks for insight decoding and category aggregation
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use insight_monitor::chart::layout;
use insight_monitor::{aggregate, decode_insights, Category};
use serde_json::{json, Value};

fn create_test_body(count: usize) -> String {
    let records: Vec<Value> = (0..count)
        .map(|i| {
            let category = Category::ALL[i % Category::ALL.len()];
            json!({
                "id": i,
                "competitor_name": format!("Competitor {}", i % 17),
                "title": format!("Insight {}", i),
                "summary": "Something happened",
                "category": category.code(),
                "category_display": category.label(),
                "source_url": format!("https://news.example/{}", i),
                "event_date": "2025-03-04T15:30:00Z"
            })
        })
        .collect();

    Value::Array(records).to_string()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [100, 1000, 10000] {
        let body = create_test_body(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("decode_{}", size), |b| {
            b.iter(|| decode_insights(black_box(&body)).unwrap())
        });
    }

    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for size in [100, 1000, 10000] {
        let insights = decode_insights(&create_test_body(size)).unwrap();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("aggregate_{}", size), |b| {
            b.iter(|| aggregate(black_box(&insights)))
        });

        let slices = aggregate(&insights);

        group.bench_function(format!("pie_layout_{}", size), |b| {
            b.iter(|| layout(black_box(&slices)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode, bench_aggregate);
criterion_main!(benches);
