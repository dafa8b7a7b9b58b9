use crate::domain::news::RawHeadline;
use crate::infrastructure::news::SourceError;
use crate::infrastructure::news::feed_parser::parse_feed;
use chrono::Utc;
use reqwest_middleware::ClientWithMiddleware;
use tracing::debug;
use url::Url;

/// Downloads an RSS document and extracts its headlines.
pub async fn fetch_feed(
    client: &ClientWithMiddleware,
    url: Url,
) -> Result<Vec<RawHeadline>, SourceError> {
    debug!("Fetching RSS feed: {}", url);

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(SourceError::Status {
            status: response.status().as_u16(),
            url: response.url().to_string(),
        });
    }

    let body = response.text().await?;
    parse_feed(&body, Utc::now())
}
