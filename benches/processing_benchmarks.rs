//! Performance benchmarks for the attendance engine.
//!
//! Covers the core pipeline over synthetic month-long exports and the
//! HTTP round trip for a single document.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use attendance_engine::api::{AppState, create_router};
use attendance_engine::calculation::process_document;
use attendance_engine::config::ShiftPolicy;
use attendance_engine::models::{Gender, WeekdayLabel};
use attendance_engine::store::InMemorySummaryStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Builds an export with `days` rows in the layout of a monthly register.
fn synthetic_month(days: usize) -> String {
    let mut text = String::from(
        "Monthly Attendance Register\n\
         Employee Name : Bench Mark\n\
         Employee Code : 9001\n\
         Department : Evaluation\n\
         Date Day Status In Out Shift\n",
    );
    for i in 0..days {
        let day = i % 28 + 1;
        let month = i / 28 + 1;
        let weekday = WeekdayLabel::ALL[i % 7];
        let line = match i % 10 {
            6 => format!("{:02}/{:02}/2025 {} WO\n", day, month, weekday),
            9 => format!("{:02}/{:02}/2025 {} AB\n", day, month, weekday),
            _ => format!(
                "{:02}/{:02}/2025 {} P 08:{:02} 18:{:02} GENERAL SHIFT\n",
                day,
                month,
                weekday,
                i % 60,
                (i * 7) % 60
            ),
        };
        text.push_str(&line);
    }
    text
}

fn bench_single_month(c: &mut Criterion) {
    let text = synthetic_month(31);
    let policy = ShiftPolicy::builtin();

    c.bench_function("process_month_31_days", |b| {
        b.iter(|| process_document(black_box(&text), Gender::Male, &policy).unwrap())
    });
}

fn bench_scaling(c: &mut Criterion) {
    let policy = ShiftPolicy::builtin();
    let mut group = c.benchmark_group("scaling");

    for days in [7usize, 31, 186, 336] {
        let text = synthetic_month(days);
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &text, |b, text| {
            b.iter(|| process_document(black_box(text), Gender::Female, &policy).unwrap())
        });
    }

    group.finish();
}

fn bench_http_round_trip(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(
        ShiftPolicy::builtin(),
        InMemorySummaryStore::new(),
    ));
    let body = serde_json::json!({ "text": synthetic_month(31), "gender": "male" }).to_string();

    c.bench_function("http_attendance_31_days", |b| {
        b.to_async(&rt).iter(|| async {
            let request = Request::builder()
                .method("POST")
                .uri("/attendance")
                .header("Content-Type", "application/json")
                .body(Body::from(body.clone()))
                .unwrap();
            router.clone().oneshot(request).await.unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_single_month,
    bench_scaling,
    bench_http_round_trip
);
criterion_main!(benches);
