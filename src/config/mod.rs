//! Configuration module for MarketPulse.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Server, News sources, and Cache.

mod cache_config;
mod news_config;
mod server_config;

pub use cache_config::CacheEnvConfig;
pub use news_config::{DEFAULT_USER_AGENT, NewsEnvConfig, SourceKind, parse_sources};
pub use server_config::ServerEnvConfig;

use anyhow::{Context, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerEnvConfig,
    pub news: NewsEnvConfig,
    pub cache: CacheEnvConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerEnvConfig::from_env().context("Failed to load server config")?,
            news: NewsEnvConfig::from_env().context("Failed to load news config")?,
            cache: CacheEnvConfig::from_env().context("Failed to load cache config")?,
        })
    }
}
