//! Headline source configuration parsing from environment variables.
//!
//! Covers the feed endpoints, their priority order and the outbound HTTP
//! client settings shared by every source.

use crate::infrastructure::news::google_news::DEFAULT_GOOGLE_NEWS_RSS_URL;
use crate::infrastructure::news::yahoo_finance::DEFAULT_YAHOO_FINANCE_RSS_URL;
use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

pub const DEFAULT_USER_AGENT: &str = concat!(
    "MarketPulse/",
    env!("CARGO_PKG_VERSION"),
    " (headline sentiment service)"
);

/// Headline providers, listed in `NEWS_SOURCES` in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    GoogleNews,
    YahooFinance,
    /// Offline canned headlines
    Mock,
}

impl FromStr for SourceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google" | "google_news" => Ok(SourceKind::GoogleNews),
            "yahoo" | "yahoo_finance" => Ok(SourceKind::YahooFinance),
            "mock" => Ok(SourceKind::Mock),
            _ => anyhow::bail!(
                "Invalid news source: {}. Must be 'google', 'yahoo', or 'mock'",
                s.trim()
            ),
        }
    }
}

/// News source environment configuration
#[derive(Debug, Clone)]
pub struct NewsEnvConfig {
    pub google_news_url: String,
    pub yahoo_finance_url: String,
    pub sources: Vec<SourceKind>,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

impl Default for NewsEnvConfig {
    fn default() -> Self {
        Self {
            google_news_url: DEFAULT_GOOGLE_NEWS_RSS_URL.to_string(),
            yahoo_finance_url: DEFAULT_YAHOO_FINANCE_RSS_URL.to_string(),
            sources: vec![SourceKind::GoogleNews, SourceKind::YahooFinance],
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 8,
            max_retries: 2,
        }
    }
}

impl NewsEnvConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let sources = match env::var("NEWS_SOURCES") {
            Ok(list) => parse_sources(&list)?,
            Err(_) => defaults.sources,
        };

        let timeout_secs = env::var("NEWS_TIMEOUT_SECS")
            .unwrap_or_else(|_| defaults.timeout_secs.to_string())
            .parse::<u64>()
            .context("Failed to parse NEWS_TIMEOUT_SECS")?;

        let max_retries = env::var("NEWS_MAX_RETRIES")
            .unwrap_or_else(|_| defaults.max_retries.to_string())
            .parse::<u32>()
            .context("Failed to parse NEWS_MAX_RETRIES")?;

        Ok(Self {
            google_news_url: env::var("GOOGLE_NEWS_RSS_URL").unwrap_or(defaults.google_news_url),
            yahoo_finance_url: env::var("YAHOO_FINANCE_RSS_URL")
                .unwrap_or(defaults.yahoo_finance_url),
            sources,
            user_agent: env::var("NEWS_USER_AGENT").unwrap_or(defaults.user_agent),
            timeout_secs,
            max_retries,
        })
    }
}

/// Parses a comma-separated priority list such as `"yahoo,google"`.
pub fn parse_sources(list: &str) -> Result<Vec<SourceKind>> {
    let mut sources = Vec::new();
    for part in list.split(',').filter(|p| !p.trim().is_empty()) {
        let kind = SourceKind::from_str(part)?;
        if !sources.contains(&kind) {
            sources.push(kind);
        }
    }

    if sources.is_empty() {
        anyhow::bail!("NEWS_SOURCES must name at least one source");
    }
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sources_keeps_order() {
        assert_eq!(
            parse_sources("yahoo, google").unwrap(),
            vec![SourceKind::YahooFinance, SourceKind::GoogleNews]
        );
    }

    #[test]
    fn test_parse_sources_drops_duplicates() {
        assert_eq!(
            parse_sources("google,google_news,").unwrap(),
            vec![SourceKind::GoogleNews]
        );
    }

    #[test]
    fn test_parse_sources_rejects_unknown_and_empty() {
        assert!(parse_sources("google,bing").is_err());
        assert!(parse_sources(" , ").is_err());
    }

    #[test]
    fn test_user_agent_is_descriptive() {
        assert!(DEFAULT_USER_AGENT.starts_with("MarketPulse/"));
    }
}
