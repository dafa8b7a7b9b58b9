//! Prometheus metrics definitions for MarketPulse
//!
//! All metrics use the `marketpulse_` prefix and are exposed read-only on `/metrics`.

use prometheus::{
    Counter, CounterVec, Histogram, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

/// Prometheus metrics for the sentiment service
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    /// Cache lookups by cache name and outcome (hit, coalesced, miss)
    pub cache_requests_total: CounterVec,
    /// Headline source fetches by source and outcome (ok, empty)
    pub source_fetches_total: CounterVec,
    /// Times every source came back empty and placeholders were served
    pub placeholder_fallbacks_total: Counter,
    /// Service operation latency in seconds
    pub request_latency_seconds: HistogramVec,
    /// Distribution of freshly computed aggregate scores. Unlabelled so the
    /// series count stays fixed whatever tickers clients ask for.
    pub aggregate_sentiment: Histogram,
    /// Requests rejected for a malformed ticker
    pub invalid_tickers_total: Counter,
}

impl Metrics {
    /// Create a new Metrics instance with all gauges and counters registered
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let cache_requests_total = CounterVec::new(
            Opts::new(
                "marketpulse_cache_requests_total",
                "Cache lookups by cache and outcome",
            ),
            &["cache", "outcome"],
        )?;
        registry.register(Box::new(cache_requests_total.clone()))?;

        let source_fetches_total = CounterVec::new(
            Opts::new(
                "marketpulse_source_fetches_total",
                "Headline source fetches by source and outcome",
            ),
            &["source", "outcome"],
        )?;
        registry.register(Box::new(source_fetches_total.clone()))?;

        let placeholder_fallbacks_total = Counter::with_opts(Opts::new(
            "marketpulse_placeholder_fallbacks_total",
            "Requests served placeholder headlines",
        ))?;
        registry.register(Box::new(placeholder_fallbacks_total.clone()))?;

        let request_latency_seconds = HistogramVec::new(
            HistogramOpts::new(
                "marketpulse_request_latency_seconds",
                "Service operation latency in seconds",
            )
            .buckets(vec![
                0.001, 0.005, 0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
            ]),
            &["operation"],
        )?;
        registry.register(Box::new(request_latency_seconds.clone()))?;

        let aggregate_sentiment = Histogram::with_opts(
            HistogramOpts::new(
                "marketpulse_aggregate_sentiment",
                "Aggregate sentiment score of each computed analysis (-1 to 1)",
            )
            .buckets(vec![-0.5, -0.25, -0.05, 0.05, 0.25, 0.5, 1.0]),
        )?;
        registry.register(Box::new(aggregate_sentiment.clone()))?;

        let invalid_tickers_total = Counter::with_opts(Opts::new(
            "marketpulse_invalid_tickers_total",
            "Requests rejected for a malformed ticker",
        ))?;
        registry.register(Box::new(invalid_tickers_total.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            cache_requests_total,
            source_fetches_total,
            placeholder_fallbacks_total,
            request_latency_seconds,
            aggregate_sentiment,
            invalid_tickers_total,
        })
    }

    /// Render all metrics in Prometheus text format
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder
            .encode_to_string(&metric_families)
            .unwrap_or_default()
    }

    pub fn inc_cache(&self, cache: &str, outcome: &str) {
        self.cache_requests_total
            .with_label_values(&[cache, outcome])
            .inc();
    }

    pub fn inc_source_fetch(&self, source: &str, outcome: &str) {
        self.source_fetches_total
            .with_label_values(&[source, outcome])
            .inc();
    }

    pub fn observe_aggregate(&self, score: f64) {
        self.aggregate_sentiment.observe(score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        metrics.placeholder_fallbacks_total.inc();
        assert!(metrics.render().contains("marketpulse_"));
    }

    #[test]
    fn test_cache_counter_labels() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        metrics.inc_cache("analysis", "hit");
        metrics.inc_cache("analysis", "hit");
        metrics.inc_cache("headlines", "miss");

        assert_eq!(
            metrics
                .cache_requests_total
                .with_label_values(&["analysis", "hit"])
                .get(),
            2.0
        );
        let output = metrics.render();
        assert!(output.contains("marketpulse_cache_requests_total"));
        assert!(output.contains("headlines"));
    }

    #[test]
    fn test_aggregate_histogram_has_no_ticker_label() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        metrics.observe_aggregate(0.25);
        metrics.observe_aggregate(-0.4);

        assert_eq!(metrics.aggregate_sentiment.get_sample_count(), 2);
        let output = metrics.render();
        assert!(output.contains("marketpulse_aggregate_sentiment_count 2"));
        assert!(!output.contains("ticker="));
    }

    #[test]
    fn test_independent_registries() {
        let a = Metrics::new().unwrap();
        let b = Metrics::new().unwrap();
        a.invalid_tickers_total.inc();
        assert_eq!(b.invalid_tickers_total.get(), 0.0);
    }
}
