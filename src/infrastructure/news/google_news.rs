use crate::domain::news::RawHeadline;
use crate::domain::ports::HeadlineSource;
use crate::domain::ticker::Ticker;
use crate::infrastructure::news::rss_client::fetch_feed;
use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use tracing::warn;
use url::Url;

pub const DEFAULT_GOOGLE_NEWS_RSS_URL: &str = "https://news.google.com/rss/search";

/// Google News search feed, scoped to finance outlets.
pub struct GoogleNewsSource {
    client: ClientWithMiddleware,
    base_url: Url,
}

impl GoogleNewsSource {
    pub fn new(client: ClientWithMiddleware, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn search_query(ticker: &Ticker) -> String {
        format!("{} stock site:finance.yahoo.com OR site:cnbc.com", ticker)
    }

    pub fn feed_url(&self, ticker: &Ticker) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("q", &Self::search_query(ticker))
            .append_pair("hl", "en-US")
            .append_pair("gl", "US")
            .append_pair("ceid", "US:en");
        url
    }
}

#[async_trait]
impl HeadlineSource for GoogleNewsSource {
    fn name(&self) -> &str {
        "google_news"
    }

    async fn fetch(&self, ticker: &Ticker) -> Vec<RawHeadline> {
        match fetch_feed(&self.client, self.feed_url(ticker)).await {
            Ok(headlines) => headlines,
            Err(e) => {
                warn!("GoogleNewsSource: fetch failed for {}: {}", ticker, e);
                Vec::new()
            }
        }
    }
}
