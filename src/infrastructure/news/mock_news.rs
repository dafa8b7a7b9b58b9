use crate::domain::news::RawHeadline;
use crate::domain::ports::HeadlineSource;
use crate::domain::ticker::Ticker;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::info;

/// Offline headline source returning a fixed list and counting its calls.
pub struct MockHeadlineSource {
    name: String,
    titles: Vec<String>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockHeadlineSource {
    pub fn with_titles(name: &str, titles: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            titles: titles.iter().map(|t| t.to_string()).collect(),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn empty(name: &str) -> Self {
        Self::with_titles(name, &[])
    }

    /// Simulates network latency on every fetch.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockHeadlineSource {
    fn default() -> Self {
        Self::with_titles(
            "mock",
            &[
                "Shares surge after strong quarterly growth",
                "Analysts warn of downside risk as demand weakens",
                "Company schedules annual shareholder meeting",
            ],
        )
    }
}

#[async_trait]
impl HeadlineSource for MockHeadlineSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self, ticker: &Ticker) -> Vec<RawHeadline> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        info!("MockHeadlineSource[{}]: serving {} headlines for {}", self.name, self.titles.len(), ticker);

        let now = Utc::now();
        self.titles
            .iter()
            .enumerate()
            .map(|(i, title)| RawHeadline {
                title: title.clone(),
                url: format!("https://news.example.com/{}/{}/{}", self.name, ticker, i),
                published_at: now,
            })
            .collect()
    }
}
