use crate::config::{NewsEnvConfig, SourceKind};
use crate::domain::ports::HeadlineSource;
use crate::infrastructure::core::HttpClientFactory;
use crate::infrastructure::news::{GoogleNewsSource, MockHeadlineSource, YahooFinanceSource};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use url::Url;

pub struct SourceFactory;

impl SourceFactory {
    /// Builds the headline sources in the configured priority order. All
    /// network sources share one HTTP client.
    pub fn create_sources(config: &NewsEnvConfig) -> Result<Vec<Arc<dyn HeadlineSource>>> {
        let client = HttpClientFactory::create_client(config)?;

        let mut sources: Vec<Arc<dyn HeadlineSource>> = Vec::with_capacity(config.sources.len());
        for kind in &config.sources {
            let source: Arc<dyn HeadlineSource> = match kind {
                SourceKind::GoogleNews => {
                    let base_url = Url::parse(&config.google_news_url)
                        .context("Invalid GOOGLE_NEWS_RSS_URL")?;
                    Arc::new(GoogleNewsSource::new(client.clone(), base_url))
                }
                SourceKind::YahooFinance => {
                    let base_url = Url::parse(&config.yahoo_finance_url)
                        .context("Invalid YAHOO_FINANCE_RSS_URL")?;
                    Arc::new(YahooFinanceSource::new(client.clone(), base_url))
                }
                SourceKind::Mock => Arc::new(MockHeadlineSource::default()),
            };
            sources.push(source);
        }

        info!(
            "SourceFactory: headline sources in order: {}",
            sources
                .iter()
                .map(|s| s.name())
                .collect::<Vec<_>>()
                .join(" -> ")
        );
        Ok(sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_sources_in_order() {
        let config = NewsEnvConfig {
            sources: vec![SourceKind::YahooFinance, SourceKind::GoogleNews, SourceKind::Mock],
            ..NewsEnvConfig::default()
        };

        let sources = SourceFactory::create_sources(&config).unwrap();
        let names: Vec<_> = sources.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["yahoo_finance", "google_news", "mock"]);
    }

    #[test]
    fn test_rejects_invalid_user_agent() {
        let config = NewsEnvConfig {
            user_agent: "MarketPulse\r\nX-Injected: 1".to_string(),
            ..NewsEnvConfig::default()
        };
        assert!(SourceFactory::create_sources(&config).is_err());
    }

    #[test]
    fn test_rejects_invalid_feed_url() {
        let config = NewsEnvConfig {
            google_news_url: "not a url".to_string(),
            ..NewsEnvConfig::default()
        };
        assert!(SourceFactory::create_sources(&config).is_err());
    }
}
