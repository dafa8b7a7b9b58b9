use crate::domain::sentiment::SentimentLabel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound on headlines taken from a single source.
pub const MAX_HEADLINES: usize = 15;

/// Titles longer than this (in characters) are truncated.
pub const MAX_TITLE_CHARS: usize = 500;

/// A feed item as extracted by a headline source, before scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHeadline {
    pub title: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Headline {
    pub title: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<SentimentLabel>,
}

impl Headline {
    pub fn is_scored(&self) -> bool {
        self.score.is_some() && self.label.is_some()
    }

    /// Returns a scored copy. An already scored headline is returned unchanged.
    pub fn scored(&self, score: f64, label: SentimentLabel) -> Self {
        if self.is_scored() {
            return self.clone();
        }
        Self {
            score: Some(score),
            label: Some(label),
            ..self.clone()
        }
    }
}

impl From<RawHeadline> for Headline {
    fn from(raw: RawHeadline) -> Self {
        Self {
            title: raw.title,
            url: raw.url,
            published_at: raw.published_at,
            score: None,
            label: None,
        }
    }
}

/// Trims, turns carriage returns and line feeds into spaces, and truncates
/// to [`MAX_TITLE_CHARS`] characters.
pub fn sanitize_title(text: &str) -> String {
    text.trim()
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .take(MAX_TITLE_CHARS)
        .collect()
}
