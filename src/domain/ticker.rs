use crate::domain::errors::AnalysisError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MAX_TICKER_LEN: usize = 5;

/// A validated stock symbol: 1-5 uppercase ASCII letters.
///
/// Construction trims surrounding whitespace and uppercases the input, so
/// `"nvda "` and `"NVDA"` produce the same ticker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    pub fn parse(input: &str) -> Result<Self, AnalysisError> {
        let symbol = input.trim().to_ascii_uppercase();

        let valid = !symbol.is_empty()
            && symbol.len() <= MAX_TICKER_LEN
            && symbol.chars().all(|c| c.is_ascii_uppercase());

        if valid {
            Ok(Self(symbol))
        } else {
            Err(AnalysisError::InvalidTicker {
                input: input.trim().to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Ticker {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = AnalysisError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> Self {
        ticker.0
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
