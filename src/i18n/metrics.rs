//! Translation observability.
//!
//! Counters for the language session's cache behavior, the translation
//! client's request outcomes, and the repair pass. Atomics behind a
//! `OnceLock` singleton; readers get a point-in-time `MetricsReport`.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global translation metrics singleton.
pub struct TranslationMetrics {
    /// Toggles served from the cached target document
    cache_hits: AtomicUsize,

    /// Toggles that had to run the translation pipeline
    cache_misses: AtomicUsize,

    /// Requests sent to the translation service (one per attempt)
    requests: AtomicUsize,

    /// Requests that failed (transport or structural)
    request_failures: AtomicUsize,

    /// Copyright strings that needed the `{year}` placeholder restored
    placeholder_repairs: AtomicUsize,
}

static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// Get the global translation metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(|| TranslationMetrics {
            cache_hits: AtomicUsize::new(0),
            cache_misses: AtomicUsize::new(0),
            requests: AtomicUsize::new(0),
            request_failures: AtomicUsize::new(0),
            placeholder_repairs: AtomicUsize::new(0),
        })
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_request_failure(&self) {
        self.request_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_placeholder_repair(&self) {
        self.placeholder_repairs.fetch_add(1, Ordering::Relaxed);
    }

    pub fn cache_hits(&self) -> usize {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn cache_misses(&self) -> usize {
        self.cache_misses.load(Ordering::Relaxed)
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }

    pub fn request_failures(&self) -> usize {
        self.request_failures.load(Ordering::Relaxed)
    }

    pub fn placeholder_repairs(&self) -> usize {
        self.placeholder_repairs.load(Ordering::Relaxed)
    }

    /// Generate a point-in-time metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.cache_hits();
        let misses = self.cache_misses();
        let total_toggles = hits + misses;
        let cache_hit_rate = if total_toggles > 0 {
            (hits as f64 / total_toggles as f64) * 100.0
        } else {
            0.0
        };

        let requests = self.requests();
        let failures = self.request_failures();
        let request_success_rate = if requests > 0 {
            ((requests - failures) as f64 / requests as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            cache_hits: hits,
            cache_misses: misses,
            cache_hit_rate,
            requests,
            request_failures: failures,
            request_success_rate,
            placeholder_repairs: self.placeholder_repairs(),
        }
    }

    /// Reset all counters to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.cache_hits.store(0, Ordering::Relaxed);
        self.cache_misses.store(0, Ordering::Relaxed);
        self.requests.store(0, Ordering::Relaxed);
        self.request_failures.store(0, Ordering::Relaxed);
        self.placeholder_repairs.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time translation statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub cache_hits: usize,
    pub cache_misses: usize,
    /// Cache hit rate as a percentage (0-100)
    pub cache_hit_rate: f64,
    pub requests: usize,
    pub request_failures: usize,
    /// Request success rate as a percentage (0-100)
    pub request_success_rate: f64,
    pub placeholder_repairs: usize,
}
