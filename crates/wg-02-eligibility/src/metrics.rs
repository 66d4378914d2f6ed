//! # Eligibility Metrics
//!
//! Prometheus metrics for eligibility decisions and registration commits.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! wg-02-eligibility = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `eligibility_outcomes_total{outcome}` - evaluations by outcome code
//! - `registration_commits_total{result}` - commit attempts (`ok`, `failed`)
//! - `registration_latency_seconds` - end-to-end `process` latency

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_histogram, register_int_counter_vec, Histogram, IntCounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Evaluations, labeled by outcome code
    pub static ref OUTCOMES: IntCounterVec = register_int_counter_vec!(
        "eligibility_outcomes_total",
        "Total eligibility evaluations by outcome",
        &["outcome"]
    )
    .expect("Failed to create OUTCOMES metric");

    /// Registration commit attempts, labeled by result
    pub static ref COMMITS: IntCounterVec = register_int_counter_vec!(
        "registration_commits_total",
        "Total registration commit attempts",
        &["result"]
    )
    .expect("Failed to create COMMITS metric");

    /// Histogram of process() latency
    pub static ref PROCESS_LATENCY: Histogram = register_histogram!(
        "registration_latency_seconds",
        "Time taken to process a registration attempt in seconds",
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5]
    )
    .expect("Failed to create PROCESS_LATENCY metric");
}

/// Record an evaluation outcome
#[cfg(feature = "metrics")]
pub fn record_outcome(code: &str) {
    OUTCOMES.with_label_values(&[code]).inc();
}

/// Record a commit attempt
#[cfg(feature = "metrics")]
pub fn record_commit(ok: bool) {
    COMMITS
        .with_label_values(&[if ok { "ok" } else { "failed" }])
        .inc();
}

/// Record process latency
#[cfg(feature = "metrics")]
pub fn record_process_latency(seconds: f64) {
    PROCESS_LATENCY.observe(seconds);
}

// No-op implementations when metrics feature is disabled
#[cfg(not(feature = "metrics"))]
pub fn record_outcome(_code: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_commit(_ok: bool) {}

#[cfg(not(feature = "metrics"))]
pub fn record_process_latency(_seconds: f64) {}
