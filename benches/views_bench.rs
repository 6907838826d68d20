//! Benchmarks for LoanSewa view shaping
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use loansewa::report;
use loansewa_core::analytics;
use loansewa_core::models::LoanApplication;

fn create_test_applications(count: usize) -> Vec<LoanApplication> {
    (0..count)
        .map(|i| LoanApplication {
            id: i as i64,
            user_id: (i % 50) as i64,
            user_name: Some(format!("Applicant {}", i % 50)),
            loan_amount: 100_000.0 + (i % 40) as f64 * 25_000.0,
            credit_score: Some(300 + (i as i64 * 37) % 600),
            rating: Some("Good".to_string()),
            status: if i % 3 == 0 { "Approved" } else { "Rejected" }.to_string(),
            // Newest first, as the API returns them
            created_at: format!(
                "2024-{:02}-{:02}T{:02}:00:00",
                12 - (i / 28) % 12,
                28 - i % 28,
                i % 24
            ),
            ..Default::default()
        })
        .collect()
}

fn bench_analytics(c: &mut Criterion) {
    let mut group = c.benchmark_group("analytics");

    for size in [10, 1000, 10000] {
        let apps = create_test_applications(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("credit_score_trend_{}", size), |b| {
            b.iter(|| analytics::credit_score_trend(black_box(&apps)))
        });

        group.bench_function(format!("summary_{}", size), |b| {
            b.iter(|| analytics::summary(black_box(&apps)))
        });
    }

    group.finish();
}

fn bench_reports(c: &mut Criterion) {
    let mut group = c.benchmark_group("reports");
    let apps = create_test_applications(1000);

    group.throughput(Throughput::Elements(1000));

    group.bench_function("applications_table_1000", |b| {
        b.iter(|| report::applications_table(black_box(&apps)))
    });

    group.bench_function("applications_csv_1000", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(128 * 1024);
            report::write_applications_csv(black_box(&apps), &mut buf).unwrap();
            buf
        })
    });

    group.finish();
}

criterion_group!(benches, bench_analytics, bench_reports);
criterion_main!(benches);
