//! Request counters for the contact API client.
//!
//! Every clone of a [`Metrics`] handle shares the same counters, so the
//! sync client and its async wrapper report into one place.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct Counters {
    requests: AtomicU64,
    failures: AtomicU64,
    latency_ms: AtomicU64,
    slowest_ms: AtomicU64,
    fetched: AtomicU64,
    created: AtomicU64,
    deleted: AtomicU64,
}

/// Shared handle to the client's counters.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    counters: Arc<Counters>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finished HTTP exchange.
    pub fn record_request(&self, elapsed: Duration, failed: bool) {
        let ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        let c = &self.counters;

        c.requests.fetch_add(1, Ordering::Relaxed);
        c.latency_ms.fetch_add(ms, Ordering::Relaxed);
        c.slowest_ms.fetch_max(ms, Ordering::Relaxed);
        if failed {
            c.failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_contacts_fetched(&self, count: usize) {
        self.counters
            .fetched
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_contact_created(&self) {
        self.counters.created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_contact_deleted(&self) {
        self.counters.deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn http_requests_total(&self) -> u64 {
        self.counters.requests.load(Ordering::Relaxed)
    }

    /// Requests that ended in a transport failure or a non-2xx status.
    pub fn http_errors_total(&self) -> u64 {
        self.counters.failures.load(Ordering::Relaxed)
    }

    pub fn contacts_fetched_total(&self) -> u64 {
        self.counters.fetched.load(Ordering::Relaxed)
    }

    pub fn contacts_created_total(&self) -> u64 {
        self.counters.created.load(Ordering::Relaxed)
    }

    pub fn contacts_deleted_total(&self) -> u64 {
        self.counters.deleted.load(Ordering::Relaxed)
    }

    /// Snapshot of every counter.
    pub fn summary(&self) -> MetricsSummary {
        let c = &self.counters;
        let requests = c.requests.load(Ordering::Relaxed);
        let latency_ms = c.latency_ms.load(Ordering::Relaxed);

        MetricsSummary {
            requests,
            failures: c.failures.load(Ordering::Relaxed),
            avg_latency_ms: if requests == 0 {
                0.0
            } else {
                latency_ms as f64 / requests as f64
            },
            slowest_ms: c.slowest_ms.load(Ordering::Relaxed),
            contacts_fetched: c.fetched.load(Ordering::Relaxed),
            contacts_created: c.created.load(Ordering::Relaxed),
            contacts_deleted: c.deleted.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the client counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSummary {
    pub requests: u64,
    pub failures: u64,
    pub avg_latency_ms: f64,
    pub slowest_ms: u64,
    pub contacts_fetched: u64,
    pub contacts_created: u64,
    pub contacts_deleted: u64,
}

/// Measures one HTTP exchange from construction to completion.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    pub fn complete(self) {
        self.metrics.record_request(self.start.elapsed(), false);
    }

    pub fn complete_with_error(self) {
        self.metrics.record_request(self.start.elapsed(), true);
    }
}
