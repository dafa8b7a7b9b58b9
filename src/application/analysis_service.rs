//! Analysis Service
//!
//! Entry point for per-ticker sentiment. Validates the ticker, then serves the
//! result from the analysis cache or builds it: headlines (themselves cached)
//! are scored one by one and averaged into an aggregate.

use crate::application::cache::TtlCache;
use crate::application::news::HeadlineFeed;
use crate::application::sentiment::{label, round_score, score};
use crate::config::CacheEnvConfig;
use crate::domain::errors::AnalysisError;
use crate::domain::news::Headline;
use crate::domain::ports::HeadlineSource;
use crate::domain::sentiment::{AggregateSentiment, AnalyzeResult};
use crate::domain::ticker::Ticker;
use crate::infrastructure::observability::{LatencyGuard, Metrics};
use chrono::Utc;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

pub struct AnalysisService {
    feed: HeadlineFeed,
    headline_cache: TtlCache<Vec<Headline>>,
    analysis_cache: TtlCache<AnalyzeResult>,
    metrics: Metrics,
}

impl AnalysisService {
    pub fn new(
        feed: HeadlineFeed,
        ttl: Duration,
        max_entries: Option<usize>,
        metrics: Metrics,
    ) -> Self {
        Self {
            feed: feed.with_metrics(metrics.clone()),
            headline_cache: TtlCache::new("headlines", ttl, max_entries),
            analysis_cache: TtlCache::new("analysis", ttl, max_entries),
            metrics,
        }
    }

    pub fn from_config(
        sources: Vec<Arc<dyn HeadlineSource>>,
        config: &CacheEnvConfig,
        metrics: Metrics,
    ) -> Self {
        Self::new(
            HeadlineFeed::new(sources),
            config.ttl(),
            config.max_entries(),
            metrics,
        )
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Scored headlines and aggregate sentiment for `raw_ticker`.
    ///
    /// Repeated calls within the cache TTL return the identical result,
    /// `updated_at` included.
    pub async fn analyze(&self, raw_ticker: &str) -> Result<AnalyzeResult, AnalysisError> {
        let _latency = LatencyGuard::new(&self.metrics.request_latency_seconds, "analyze");
        let ticker = self.validate(raw_ticker)?;

        let key = format!("analysis_{}", ticker);
        let (result, status) = self
            .analysis_cache
            .get_or_try_insert_with(&key, || self.build_analysis(&ticker))
            .await?;
        self.metrics
            .inc_cache(self.analysis_cache.name(), status.as_str());

        debug!("AnalysisService: {} served ({})", ticker, status.as_str());
        Ok(result)
    }

    /// The unscored headline set for `raw_ticker`, shared with [`analyze`](Self::analyze).
    pub async fn headlines(&self, raw_ticker: &str) -> Result<Vec<Headline>, AnalysisError> {
        let _latency = LatencyGuard::new(&self.metrics.request_latency_seconds, "headlines");
        let ticker = self.validate(raw_ticker)?;
        Ok(self.cached_headlines(&ticker).await)
    }

    /// Drops expired entries from both caches. Returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        self.headline_cache.purge_expired().await + self.analysis_cache.purge_expired().await
    }

    fn validate(&self, raw_ticker: &str) -> Result<Ticker, AnalysisError> {
        Ticker::parse(raw_ticker).inspect_err(|e| {
            warn!("AnalysisService: rejected ticker: {}", e);
            self.metrics.invalid_tickers_total.inc();
        })
    }

    async fn cached_headlines(&self, ticker: &Ticker) -> Vec<Headline> {
        let key = format!("headlines_{}", ticker);
        let fetched = self
            .headline_cache
            .get_or_try_insert_with(&key, || async {
                Ok::<_, Infallible>(self.feed.fetch_headlines(ticker).await)
            })
            .await;

        match fetched {
            Ok((headlines, status)) => {
                self.metrics
                    .inc_cache(self.headline_cache.name(), status.as_str());
                headlines
            }
            Err(never) => match never {},
        }
    }

    async fn build_analysis(&self, ticker: &Ticker) -> Result<AnalyzeResult, AnalysisError> {
        let headlines: Vec<Headline> = self
            .cached_headlines(ticker)
            .await
            .into_iter()
            .map(score_headline)
            .collect();

        let aggregate = aggregate(&headlines).map_err(|reason| {
            error!("AnalysisService: aggregation failed for {}: {}", ticker, reason);
            AnalysisError::Aggregation {
                ticker: ticker.to_string(),
                reason,
            }
        })?;

        self.metrics.observe_aggregate(aggregate.score);
        info!(
            "AnalysisService: {} -> {} ({:.3}) over {} headlines",
            ticker,
            aggregate.label,
            aggregate.score,
            headlines.len()
        );

        Ok(AnalyzeResult {
            ticker: ticker.clone(),
            updated_at: Utc::now(),
            aggregate,
            headlines,
        })
    }
}

fn score_headline(headline: Headline) -> Headline {
    if headline.is_scored() {
        return headline;
    }
    let value = round_score(score(&headline.title));
    headline.scored(value, label(value))
}

/// Mean of the (already rounded) headline scores, rounded again; 0 with no
/// headlines.
pub fn aggregate(headlines: &[Headline]) -> Result<AggregateSentiment, String> {
    if headlines.is_empty() {
        return Ok(AggregateSentiment {
            score: 0.0,
            label: label(0.0),
        });
    }

    let mut sum = 0.0;
    for headline in headlines {
        match headline.score {
            Some(s) if s.is_finite() => sum += s,
            Some(s) => return Err(format!("non-finite score {} for '{}'", s, headline.title)),
            None => return Err(format!("unscored headline '{}'", headline.title)),
        }
    }

    let mean = round_score(sum / headlines.len() as f64);
    if !mean.is_finite() {
        return Err(format!("non-finite aggregate {}", mean));
    }

    Ok(AggregateSentiment {
        score: mean,
        label: label(mean),
    })
}
