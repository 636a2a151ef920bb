use chore_core::models::{CustomUnit, Domain, RecurrenceRule, Task};
use chore_core::recurrence::{preview_due_dates, resolve_next_due};
use chore_core::templates::catalog;
use chore_core::urgency::{group_by_urgency, sort_by_urgency};
use chrono::{Duration, NaiveDate, Utc, Weekday};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use uuid::Uuid;

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
}

fn create_test_task(offset: i64) -> Task {
    Task {
        id: Uuid::now_v7(),
        template_id: None,
        name: format!("Benchmark Task {}", offset),
        description: None,
        category: "Bench".to_string(),
        domain: Domain::Home,
        rule: RecurrenceRule::Daily,
        cost: None,
        notes: None,
        last_completed_at: None,
        next_due: reference() + Duration::days(offset % 60 - 20),
        created_at: Utc::now(),
        version: 0,
    }
}

fn bench_resolve_each_kind(c: &mut Criterion) {
    let rules = [
        ("daily", RecurrenceRule::Daily),
        ("weekly_on", RecurrenceRule::weekly_on(Weekday::Wed)),
        ("monthly_clamped", RecurrenceRule::monthly_on(31).unwrap()),
        ("yearly", RecurrenceRule::yearly(2)),
        ("custom_weeks", RecurrenceRule::custom(6, CustomUnit::Weeks)),
    ];

    let mut group = c.benchmark_group("resolve_next_due");
    for (name, rule) in rules.iter() {
        group.bench_function(*name, |b| {
            b.iter(|| resolve_next_due(black_box(rule), black_box(reference())))
        });
    }
    group.finish();
}

fn bench_resolve_catalog(c: &mut Criterion) {
    c.bench_function("resolve_catalog", |b| {
        b.iter(|| {
            catalog()
                .iter()
                .map(|template| resolve_next_due(&template.rule, black_box(reference())))
                .max()
        })
    });
}

fn bench_preview(c: &mut Criterion) {
    let rule = RecurrenceRule::monthly_on(31).unwrap();
    c.bench_function("preview_24_months", |b| {
        b.iter(|| preview_due_dates(black_box(&rule), reference(), 24))
    });
}

fn bench_urgency_sort(c: &mut Criterion) {
    let tasks: Vec<Task> = (0..1000).map(create_test_task).collect();

    c.bench_function("sort_by_urgency_1000", |b| {
        b.iter(|| {
            let mut batch = tasks.clone();
            sort_by_urgency(&mut batch, black_box(reference()));
            batch
        })
    });
    c.bench_function("group_by_urgency_1000", |b| {
        b.iter(|| group_by_urgency(black_box(tasks.clone()), reference()))
    });
}

criterion_group!(
    benches,
    bench_resolve_each_kind,
    bench_resolve_catalog,
    bench_preview,
    bench_urgency_sort
);
criterion_main!(benches);
