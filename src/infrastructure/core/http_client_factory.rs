use crate::config::NewsEnvConfig;
use anyhow::{Context, Result};
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use std::time::Duration;

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Creates the shared feed client: bounded total timeout, descriptive
    /// user agent, and exponential-backoff retries on transient failures.
    ///
    /// A user agent that is not a valid header value is a configuration error.
    pub fn create_client(config: &NewsEnvConfig) -> Result<ClientWithMiddleware> {
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);

        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .pool_max_idle_per_host(5)
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(5)))
            .build()
            .context("Failed to build HTTP client (check NEWS_USER_AGENT)")?;

        Ok(ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_with_defaults() {
        assert!(HttpClientFactory::create_client(&NewsEnvConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_user_agent_is_config_error() {
        let config = NewsEnvConfig {
            user_agent: "MarketPulse\nbad".to_string(),
            ..NewsEnvConfig::default()
        };

        let err = HttpClientFactory::create_client(&config).unwrap_err();
        assert!(err.to_string().contains("NEWS_USER_AGENT"));
    }
}
