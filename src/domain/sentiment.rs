use crate::domain::news::Headline;
use crate::domain::ticker::Ticker;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateSentiment {
    pub score: f64, // -1.0 to 1.0, rounded to 3 decimals
    pub label: SentimentLabel,
}

/// Scored headline set for one ticker, as served to clients and cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResult {
    pub ticker: Ticker,
    pub updated_at: DateTime<Utc>,
    pub aggregate: AggregateSentiment,
    pub headlines: Vec<Headline>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SentimentLabel::Positive).unwrap(),
            "\"positive\""
        );
        assert_eq!(SentimentLabel::Negative.to_string(), "negative");
    }

    #[test]
    fn test_analyze_result_uses_camel_case() {
        let result = AnalyzeResult {
            ticker: Ticker::parse("AAPL").unwrap(),
            updated_at: DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            aggregate: AggregateSentiment {
                score: 0.0,
                label: SentimentLabel::Neutral,
            },
            headlines: Vec::new(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["ticker"], "AAPL");
        assert_eq!(json["updatedAt"], "2024-05-01T12:00:00Z");
        assert_eq!(json["aggregate"]["label"], "neutral");
        assert!(json["headlines"].as_array().unwrap().is_empty());
    }
}
