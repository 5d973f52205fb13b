//! Prometheus metrics for scheduling observability.

use prometheus::{Histogram, HistogramOpts, IntCounter, Registry};
use std::sync::LazyLock;

/// Global metrics registry, exported at `/metrics` alongside the HTTP-level
/// metrics collected by the middleware.
pub static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Total number of scheduling requests that reached the engine
pub static SCHEDULE_REQUESTS_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    let counter = IntCounter::new(
        "schedule_requests_total",
        "Total number of scheduling requests processed",
    )
    .expect("metric can be created");
    REGISTRY.register(Box::new(counter.clone())).unwrap();
    counter
});

/// Scheduling runs that found a dependency cycle
pub static UNSCHEDULABLE_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    let counter = IntCounter::new(
        "schedule_unschedulable_total",
        "Scheduling runs whose dependency graph contained a cycle",
    )
    .expect("metric can be created");
    REGISTRY.register(Box::new(counter.clone())).unwrap();
    counter
});

/// Warnings emitted across all scheduling runs
pub static SCHEDULE_WARNINGS_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    let counter = IntCounter::new(
        "schedule_warnings_total",
        "Total warnings (dangling, cycle, overdue) emitted in responses",
    )
    .expect("metric can be created");
    REGISTRY.register(Box::new(counter.clone())).unwrap();
    counter
});

/// Distribution of task counts per request
pub static TASKS_PER_REQUEST: LazyLock<Histogram> = LazyLock::new(|| {
    let histogram = Histogram::with_opts(
        HistogramOpts::new(
            "schedule_tasks_per_request",
            "Number of tasks in each scheduling request",
        )
        .buckets(vec![1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0]),
    )
    .expect("metric can be created");
    REGISTRY.register(Box::new(histogram.clone())).unwrap();
    histogram
});

/// Force registration of every metric so `/metrics` exports the full series
/// set from boot instead of after the first scheduling request lands.
pub fn init() {
    LazyLock::force(&SCHEDULE_REQUESTS_TOTAL);
    LazyLock::force(&UNSCHEDULABLE_TOTAL);
    LazyLock::force(&SCHEDULE_WARNINGS_TOTAL);
    LazyLock::force(&TASKS_PER_REQUEST);
}

/// Record one completed scheduling run.
pub fn record_schedule_run(task_count: usize, is_schedulable: bool, warning_count: usize) {
    SCHEDULE_REQUESTS_TOTAL.inc();
    TASKS_PER_REQUEST.observe(task_count as f64);
    if !is_schedulable {
        UNSCHEDULABLE_TOTAL.inc();
    }
    SCHEDULE_WARNINGS_TOTAL.inc_by(warning_count as u64);
}
