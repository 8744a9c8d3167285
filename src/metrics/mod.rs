//! Traffic counters for the contacts API client.
//!
//! Every clone of [`Metrics`] shares one set of counters, so the client and
//! whoever reports on it see the same numbers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct Counters {
    http_requests: AtomicU64,
    http_errors: AtomicU64,
    http_duration_ms: AtomicU64,
    contacts_fetched: AtomicU64,
    contacts_created: AtomicU64,
    contacts_deleted: AtomicU64,
}

/// Shared counters for HTTP calls and contact traffic.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    counters: Arc<Counters>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start timing one HTTP call.
    pub fn timer(&self) -> HttpTimer {
        HttpTimer {
            start: Instant::now(),
            metrics: self.clone(),
        }
    }

    /// Record a finished HTTP call.
    pub fn record_http_request(&self, duration: Duration) {
        let c = &self.counters;
        c.http_requests.fetch_add(1, Ordering::Relaxed);
        c.http_duration_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn record_http_error(&self) {
        self.counters.http_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the size of a fetched list.
    pub fn record_contacts_fetched(&self, count: usize) {
        self.counters
            .contacts_fetched
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_contact_created(&self) {
        self.counters.contacts_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_contact_deleted(&self) {
        self.counters.contacts_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn http_requests_total(&self) -> u64 {
        self.counters.http_requests.load(Ordering::Relaxed)
    }

    pub fn http_errors_total(&self) -> u64 {
        self.counters.http_errors.load(Ordering::Relaxed)
    }

    pub fn contacts_fetched_total(&self) -> u64 {
        self.counters.contacts_fetched.load(Ordering::Relaxed)
    }

    pub fn contacts_created_total(&self) -> u64 {
        self.counters.contacts_created.load(Ordering::Relaxed)
    }

    pub fn contacts_deleted_total(&self) -> u64 {
        self.counters.contacts_deleted.load(Ordering::Relaxed)
    }

    /// Point-in-time copy of every counter.
    pub fn summary(&self) -> MetricsSummary {
        let http_requests_total = self.http_requests_total();
        let http_duration_total_ms = self.counters.http_duration_ms.load(Ordering::Relaxed);
        let http_duration_avg_ms = if http_requests_total == 0 {
            0.0
        } else {
            http_duration_total_ms as f64 / http_requests_total as f64
        };

        MetricsSummary {
            http_requests_total,
            http_errors_total: self.http_errors_total(),
            http_duration_total_ms,
            http_duration_avg_ms,
            contacts_fetched_total: self.contacts_fetched_total(),
            contacts_created_total: self.contacts_created_total(),
            contacts_deleted_total: self.contacts_deleted_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_total_ms: u64,
    pub http_duration_avg_ms: f64,
    pub contacts_fetched_total: u64,
    pub contacts_created_total: u64,
    pub contacts_deleted_total: u64,
}

impl fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "requests={} errors={} avg_ms={:.1} fetched={} created={} deleted={}",
            self.http_requests_total,
            self.http_errors_total,
            self.http_duration_avg_ms,
            self.contacts_fetched_total,
            self.contacts_created_total,
            self.contacts_deleted_total,
        )
    }
}

/// Times one HTTP call; consume it with `complete` or `complete_with_error`.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    pub fn complete(self) {
        self.metrics.record_http_request(self.start.elapsed());
    }

    pub fn complete_with_error(self) {
        self.metrics.record_http_request(self.start.elapsed());
        self.metrics.record_http_error();
    }
}
