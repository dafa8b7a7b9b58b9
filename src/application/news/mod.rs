//! Headline Feed
//!
//! Resolves the headline set for a ticker from an ordered chain of sources.
//! The first source returning a non-empty list wins; results are never merged
//! across sources. When every source comes back empty a fixed set of
//! placeholder headlines is returned so callers always have something to score.

use crate::domain::news::{Headline, MAX_HEADLINES};
use crate::domain::ports::HeadlineSource;
use crate::domain::ticker::Ticker;
use crate::infrastructure::observability::Metrics;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const PLACEHOLDER_COUNT: usize = 3;

pub struct HeadlineFeed {
    sources: Vec<Arc<dyn HeadlineSource>>,
    metrics: Option<Metrics>,
}

impl HeadlineFeed {
    /// `sources` are tried in the given order.
    pub fn new(sources: Vec<Arc<dyn HeadlineSource>>) -> Self {
        Self {
            sources,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub async fn fetch_headlines(&self, ticker: &Ticker) -> Vec<Headline> {
        for source in &self.sources {
            let raw = source.fetch(ticker).await;

            if raw.is_empty() {
                debug!("HeadlineFeed: {} returned nothing for {}", source.name(), ticker);
                self.record_fetch(source.name(), "empty");
                continue;
            }

            info!(
                "HeadlineFeed: {} headlines for {} from {}",
                raw.len().min(MAX_HEADLINES),
                ticker,
                source.name()
            );
            self.record_fetch(source.name(), "ok");
            return raw
                .into_iter()
                .take(MAX_HEADLINES)
                .map(Headline::from)
                .collect();
        }

        warn!(
            "HeadlineFeed: all {} sources exhausted for {}, serving placeholders",
            self.sources.len(),
            ticker
        );
        if let Some(metrics) = &self.metrics {
            metrics.placeholder_fallbacks_total.inc();
        }
        placeholder_headlines(ticker, Utc::now())
    }

    fn record_fetch(&self, source: &str, outcome: &str) {
        if let Some(metrics) = &self.metrics {
            metrics.inc_source_fetch(source, outcome);
        }
    }
}

/// Stand-in headlines served when no source has anything for `ticker`.
pub fn placeholder_headlines(ticker: &Ticker, now: DateTime<Utc>) -> Vec<Headline> {
    let templates = [
        (
            format!("{} stock shows strong performance in latest trading session", ticker),
            "https://example.com/demo1",
        ),
        (
            format!("Market analysts remain optimistic about {} prospects", ticker),
            "https://example.com/demo2",
        ),
        (
            format!("{} earnings report expected to drive investor sentiment", ticker),
            "https://example.com/demo3",
        ),
    ];

    templates
        .into_iter()
        .map(|(title, url)| Headline {
            title,
            url: url.to_string(),
            published_at: now,
            score: None,
            label: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::news::mock_news::MockHeadlineSource;

    fn ticker(s: &str) -> Ticker {
        Ticker::parse(s).unwrap()
    }

    fn chain(sources: &[&Arc<MockHeadlineSource>]) -> Vec<Arc<dyn HeadlineSource>> {
        sources
            .iter()
            .map(|s| Arc::clone(s) as Arc<dyn HeadlineSource>)
            .collect()
    }

    #[tokio::test]
    async fn test_first_non_empty_source_wins() {
        let primary = Arc::new(MockHeadlineSource::with_titles("primary", &["Apple rally"]));
        let secondary = Arc::new(MockHeadlineSource::with_titles("secondary", &["Apple slide"]));
        let feed = HeadlineFeed::new(chain(&[&primary, &secondary]));

        let headlines = feed.fetch_headlines(&ticker("AAPL")).await;

        assert_eq!(headlines.len(), 1);
        assert_eq!(headlines[0].title, "Apple rally");
        assert_eq!(primary.calls(), 1);
        assert_eq!(secondary.calls(), 0, "secondary must not be invoked");
    }

    #[tokio::test]
    async fn test_falls_through_empty_source() {
        let primary = Arc::new(MockHeadlineSource::empty("primary"));
        let secondary = Arc::new(MockHeadlineSource::with_titles("secondary", &["A", "B"]));
        let feed = HeadlineFeed::new(chain(&[&primary, &secondary]));

        let headlines = feed.fetch_headlines(&ticker("MSFT")).await;

        let titles: Vec<_> = headlines.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(primary.calls(), 1);
        assert_eq!(secondary.calls(), 1);
    }

    #[tokio::test]
    async fn test_exhaustion_yields_placeholders() {
        let primary = Arc::new(MockHeadlineSource::empty("primary"));
        let secondary = Arc::new(MockHeadlineSource::empty("secondary"));
        let feed = HeadlineFeed::new(chain(&[&primary, &secondary]));

        let headlines = feed.fetch_headlines(&ticker("TSLA")).await;

        assert_eq!(headlines.len(), PLACEHOLDER_COUNT);
        assert!(headlines.iter().all(|h| h.title.contains("TSLA")));
        assert!(headlines.iter().all(|h| h.score.is_none()));
    }

    #[tokio::test]
    async fn test_caps_winning_source_at_limit() {
        let titles: Vec<String> = (0..25).map(|i| format!("Headline {}", i)).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let bulk = Arc::new(MockHeadlineSource::with_titles("bulk", &refs));
        let feed = HeadlineFeed::new(chain(&[&bulk]));

        let headlines = feed.fetch_headlines(&ticker("AMZN")).await;

        assert_eq!(headlines.len(), MAX_HEADLINES);
        assert_eq!(headlines[0].title, "Headline 0");
        assert_eq!(headlines[14].title, "Headline 14");
    }

    #[tokio::test]
    async fn test_records_metrics() {
        let metrics = Metrics::new().unwrap();
        let google = Arc::new(MockHeadlineSource::empty("google"));
        let feed = HeadlineFeed::new(chain(&[&google])).with_metrics(metrics.clone());

        feed.fetch_headlines(&ticker("IBM")).await;

        assert_eq!(
            metrics
                .source_fetches_total
                .with_label_values(&["google", "empty"])
                .get(),
            1.0
        );
        assert_eq!(metrics.placeholder_fallbacks_total.get(), 1.0);
    }

    #[test]
    fn test_placeholder_templates() {
        let now = Utc::now();
        let headlines = placeholder_headlines(&ticker("NVDA"), now);

        assert_eq!(
            headlines[0].title,
            "NVDA stock shows strong performance in latest trading session"
        );
        assert_eq!(headlines[1].url, "https://example.com/demo2");
        assert!(headlines.iter().all(|h| h.published_at == now));
    }
}
