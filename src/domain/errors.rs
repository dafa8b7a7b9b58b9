use thiserror::Error;

/// Errors surfaced to callers of the analysis service.
///
/// Source-level failures never appear here: fetchers absorb them and the
/// headline feed falls through to the next source or to placeholders.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Ticker '{input}' is not a valid format. Must be 1-5 letters only.")]
    InvalidTicker { input: String },

    #[error("Sentiment aggregation failed for {ticker}: {reason}")]
    Aggregation { ticker: String, reason: String },
}

impl AnalysisError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidTicker { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_ticker_formatting() {
        let error = AnalysisError::InvalidTicker {
            input: "TOOLONG".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("TOOLONG"));
        assert!(msg.contains("1-5 letters"));
        assert!(error.is_client_error());
    }

    #[test]
    fn test_aggregation_error_is_server_side() {
        let error = AnalysisError::Aggregation {
            ticker: "AAPL".to_string(),
            reason: "non-finite score".to_string(),
        };

        assert!(error.to_string().contains("AAPL"));
        assert!(!error.is_client_error());
    }
}
