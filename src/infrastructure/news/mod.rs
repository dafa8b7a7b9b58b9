pub mod feed_parser;
pub mod google_news;
pub mod mock_news;
pub mod rss_client;
pub mod yahoo_finance;

pub use google_news::GoogleNewsSource;
pub use mock_news::MockHeadlineSource;
pub use yahoo_finance::YahooFinanceSource;

use thiserror::Error;

/// Why a single source produced nothing. Logged by the source, never returned
/// past it.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest_middleware::Error),

    #[error("HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("failed to read response body: {0}")]
    Body(#[from] reqwest::Error),

    #[error("unparseable feed: {0}")]
    Parse(String),
}
