//! # Admission Metrics
//!
//! Prometheus counters for waitlist admissions.
//!
//! Enable with the `metrics` feature:
//! ```toml
//! wg-01-admission = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `waitlist_admissions_total{result}` - admission attempts by result
//!   (`admitted`, `existing`, `full`, `rejected`)

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter_vec, IntCounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Admission attempts, labeled by result
    pub static ref ADMISSIONS: IntCounterVec = register_int_counter_vec!(
        "waitlist_admissions_total",
        "Total waitlist admission attempts",
        &["result"]
    )
    .expect("Failed to create ADMISSIONS metric");
}

/// Record an admission attempt with its result label
#[cfg(feature = "metrics")]
pub fn record_admission(result: &str) {
    ADMISSIONS.with_label_values(&[result]).inc();
}

#[cfg(not(feature = "metrics"))]
pub fn record_admission(_result: &str) {}
