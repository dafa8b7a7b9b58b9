use prometheus::{Histogram, HistogramVec};
use std::time::Instant;

/// Records the time until drop into one labelled latency series.
pub struct LatencyGuard {
    start: Instant,
    histogram: Histogram,
}

impl LatencyGuard {
    pub fn new(histograms: &HistogramVec, operation: &str) -> Self {
        Self {
            start: Instant::now(),
            histogram: histograms.with_label_values(&[operation]),
        }
    }
}

impl Drop for LatencyGuard {
    fn drop(&mut self) {
        self.histogram.observe(self.start.elapsed().as_secs_f64());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus::HistogramOpts;

    #[test]
    fn test_guard_observes_its_operation_only() {
        let histograms =
            HistogramVec::new(HistogramOpts::new("test_latency", "test"), &["operation"]).unwrap();

        {
            let _guard = LatencyGuard::new(&histograms, "analyze");
            std::thread::sleep(std::time::Duration::from_millis(10));
        }

        let analyze = histograms.with_label_values(&["analyze"]);
        assert!(analyze.get_sample_sum() >= 0.01);
        assert_eq!(analyze.get_sample_count(), 1);
        assert_eq!(
            histograms.with_label_values(&["headlines"]).get_sample_count(),
            0
        );
    }
}
