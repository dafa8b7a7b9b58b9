use crate::domain::news::RawHeadline;
use crate::domain::ticker::Ticker;
use async_trait::async_trait;

/// A provider of recent headlines for a ticker.
///
/// Implementations own their error boundary: transport, status and parse
/// failures are logged and reported as an empty list, never returned.
#[async_trait]
pub trait HeadlineSource: Send + Sync {
    /// Short identifier used in logs and metric labels.
    fn name(&self) -> &str;

    async fn fetch(&self, ticker: &Ticker) -> Vec<RawHeadline>;
}
