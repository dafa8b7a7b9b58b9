//! HTTP server configuration parsing from environment variables.

use anyhow::{Context, Result};
use std::env;

/// Server environment configuration
#[derive(Debug, Clone)]
pub struct ServerEnvConfig {
    pub host: String,
    pub port: u16,
    /// Browser origin allowed by CORS, alongside local development
    pub web_origin: String,
}

impl Default for ServerEnvConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            web_origin: "http://localhost:3002".to_string(),
        }
    }
}

impl ServerEnvConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or(defaults.host),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse::<u16>()
                .context("Failed to parse SERVER_PORT")?,
            web_origin: env::var("WEB_ORIGIN").unwrap_or(defaults.web_origin),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins = vec![self.web_origin.clone()];
        let local = "http://localhost:3000".to_string();
        if !origins.contains(&local) {
            origins.push(local);
        }
        origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        let config = ServerEnvConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert_eq!(
            config.allowed_origins(),
            vec!["http://localhost:3002", "http://localhost:3000"]
        );
    }
}
