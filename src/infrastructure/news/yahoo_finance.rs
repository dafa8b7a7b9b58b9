use crate::domain::news::RawHeadline;
use crate::domain::ports::HeadlineSource;
use crate::domain::ticker::Ticker;
use crate::infrastructure::news::rss_client::fetch_feed;
use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use tracing::warn;
use url::Url;

pub const DEFAULT_YAHOO_FINANCE_RSS_URL: &str = "https://feeds.finance.yahoo.com/rss/2.0/headline";

/// Yahoo Finance per-symbol headline feed.
pub struct YahooFinanceSource {
    client: ClientWithMiddleware,
    base_url: Url,
}

impl YahooFinanceSource {
    pub fn new(client: ClientWithMiddleware, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn feed_url(&self, ticker: &Ticker) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("s", ticker.as_str())
            .append_pair("region", "US")
            .append_pair("lang", "en-US");
        url
    }
}

#[async_trait]
impl HeadlineSource for YahooFinanceSource {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    async fn fetch(&self, ticker: &Ticker) -> Vec<RawHeadline> {
        match fetch_feed(&self.client, self.feed_url(ticker)).await {
            Ok(headlines) => headlines,
            Err(e) => {
                warn!("YahooFinanceSource: fetch failed for {}: {}", ticker, e);
                Vec::new()
            }
        }
    }
}
