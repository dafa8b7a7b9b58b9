//! Cache configuration parsing from environment variables.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Cache environment configuration
#[derive(Debug, Clone)]
pub struct CacheEnvConfig {
    pub ttl_secs: u64,
    /// 0 leaves the caches unbounded
    pub max_entries: usize,
    /// 0 disables the background sweep
    pub sweep_interval_secs: u64,
}

impl Default for CacheEnvConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 60,
            max_entries: 1024,
            sweep_interval_secs: 300,
        }
    }
}

impl CacheEnvConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            ttl_secs: env::var("CACHE_TTL_SECS")
                .unwrap_or_else(|_| defaults.ttl_secs.to_string())
                .parse::<u64>()
                .context("Failed to parse CACHE_TTL_SECS")?,
            max_entries: env::var("CACHE_MAX_ENTRIES")
                .unwrap_or_else(|_| defaults.max_entries.to_string())
                .parse::<usize>()
                .context("Failed to parse CACHE_MAX_ENTRIES")?,
            sweep_interval_secs: env::var("CACHE_SWEEP_INTERVAL_SECS")
                .unwrap_or_else(|_| defaults.sweep_interval_secs.to_string())
                .parse::<u64>()
                .context("Failed to parse CACHE_SWEEP_INTERVAL_SECS")?,
        })
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn max_entries(&self) -> Option<usize> {
        (self.max_entries > 0).then_some(self.max_entries)
    }

    pub fn sweep_interval(&self) -> Option<Duration> {
        (self.sweep_interval_secs > 0).then(|| Duration::from_secs(self.sweep_interval_secs))
    }
}
