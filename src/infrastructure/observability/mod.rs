//! Observability for MarketPulse
//!
//! Prometheus counters, gauges and latency histograms kept in a private
//! registry and rendered in text format for the `/metrics` route.

pub mod latency_tracker;
pub mod metrics;

pub use latency_tracker::LatencyGuard;
pub use metrics::Metrics;
