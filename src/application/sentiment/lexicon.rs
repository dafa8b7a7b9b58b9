//! Lexicon-based headline sentiment scoring
//!
//! Scores text with fixed financial word tables. Each matched word contributes
//! its weight, adjusted by the single token right before it:
//!
//! - an intensifier ("very", "extremely", ...) multiplies the weight;
//! - a negation ("not", "no", "never", "without") multiplies it by `-0.8`,
//!   flipping the sign and weakening it rather than fully inverting it.
//!
//! The sum is divided by the square root of the number of matched words and
//! clamped to `[-1, 1]`.
//!
//! # Example
//! ```rust
//! use marketpulse::application::sentiment::lexicon;
//!
//! let score = lexicon::score("great earnings beat expectations");
//! assert!(score > 0.05);
//! ```

const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("good", 0.3),
    ("great", 0.5),
    ("excellent", 0.7),
    ("amazing", 0.6),
    ("awesome", 0.6),
    ("fantastic", 0.6),
    ("wonderful", 0.5),
    ("outstanding", 0.7),
    ("superb", 0.6),
    ("magnificent", 0.6),
    ("brilliant", 0.5),
    ("perfect", 0.7),
    ("best", 0.6),
    ("better", 0.3),
    ("improved", 0.4),
    ("upgrade", 0.3),
    ("increase", 0.3),
    ("rise", 0.4),
    ("gain", 0.4),
    ("profit", 0.4),
    ("growth", 0.4),
    ("strong", 0.4),
    ("bullish", 0.5),
    ("positive", 0.4),
    ("up", 0.3),
    ("higher", 0.3),
    ("beat", 0.4),
    ("exceed", 0.4),
    ("outperform", 0.4),
    ("success", 0.5),
    ("win", 0.4),
    ("surge", 0.5),
    ("rally", 0.4),
    ("boom", 0.5),
    ("soar", 0.5),
    ("optimistic", 0.4),
    ("upside", 0.4),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("bad", -0.3),
    ("terrible", -0.6),
    ("awful", -0.6),
    ("horrible", -0.6),
    ("worst", -0.6),
    ("worse", -0.4),
    ("poor", -0.3),
    ("weak", -0.3),
    ("decline", -0.4),
    ("fall", -0.3),
    ("drop", -0.3),
    ("decrease", -0.3),
    ("loss", -0.4),
    ("lose", -0.3),
    ("down", -0.3),
    ("lower", -0.3),
    ("bearish", -0.5),
    ("negative", -0.4),
    ("crash", -0.7),
    ("plunge", -0.6),
    ("tumble", -0.5),
    ("sink", -0.4),
    ("slide", -0.3),
    ("disappoint", -0.4),
    ("miss", -0.3),
    ("underperform", -0.4),
    ("concern", -0.3),
    ("worry", -0.3),
    ("fear", -0.4),
    ("risk", -0.2),
    ("problem", -0.3),
    ("issue", -0.2),
    ("challenge", -0.2),
    ("struggle", -0.3),
    ("fail", -0.5),
    ("failure", -0.5),
    ("warning", -0.3),
    ("alert", -0.2),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("hugely", 1.4),
    ("particularly", 1.2),
    ("especially", 1.2),
    ("exceptionally", 1.4),
    ("remarkably", 1.3),
    ("quite", 1.1),
    ("rather", 1.1),
    ("fairly", 1.1),
    ("really", 1.2),
    ("truly", 1.2),
    ("highly", 1.3),
];

const NEGATIONS: &[&str] = &["not", "no", "never", "without"];

/// Multiplier applied to a sentiment word preceded by a negation.
pub const NEGATION_FACTOR: f64 = -0.8;

fn lookup(table: &[(&str, f64)], word: &str) -> Option<f64> {
    table.iter().find(|(w, _)| *w == word).map(|(_, v)| *v)
}

/// Base weight of a word: positive, negative, or 0.0 when not in the lexicon.
pub fn word_weight(word: &str) -> f64 {
    lookup(POSITIVE_WORDS, word)
        .or_else(|| lookup(NEGATIVE_WORDS, word))
        .unwrap_or(0.0)
}

pub fn intensifier_factor(word: &str) -> Option<f64> {
    lookup(INTENSIFIERS, word)
}

pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word)
}

/// Lowercases and splits on runs of non-word characters (word = ASCII
/// alphanumeric or `_`).
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Scores `text` in `[-1, 1]`. Text without lexicon words scores 0.0.
pub fn score(text: &str) -> f64 {
    let tokens = tokenize(text);
    let mut sum = 0.0;
    let mut matched = 0usize;

    for (i, token) in tokens.iter().enumerate() {
        let mut weight = word_weight(token);
        if weight == 0.0 {
            continue;
        }

        if let Some(previous) = i.checked_sub(1).map(|p| tokens[p].as_str()) {
            if let Some(factor) = intensifier_factor(previous) {
                weight *= factor;
            } else if is_negation(previous) {
                weight *= NEGATION_FACTOR;
            }
        }

        sum += weight;
        matched += 1;
    }

    if matched > 0 {
        // Sub-linear: many weak words do not outweigh a few strong ones.
        sum /= (matched as f64).sqrt();
    }

    sum.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_bullish_headlines() {
        let bullish_headlines = [
            "great earnings beat expectations",
            "Shares surge as revenue growth accelerates",
            "Analysts turn bullish after strong quarter",
            "Stock hits best level in a year on record profit",
        ];

        for headline in bullish_headlines {
            let s = score(headline);
            assert!(s > 0.05, "Expected bullish score for '{}', got {}", headline, s);
        }
    }

    #[test]
    fn test_bearish_headlines() {
        let bearish_headlines = [
            "company faces terrible losses and risk",
            "Shares plunge after earnings miss",
            "Market crash sparks fear among investors",
            "Regulator issues warning over weak guidance",
        ];

        for headline in bearish_headlines {
            let s = score(headline);
            assert!(s < -0.05, "Expected bearish score for '{}', got {}", headline, s);
        }
    }

    #[test]
    fn test_sqrt_normalization() {
        // great (0.5) + beat (0.4) over sqrt(2)
        assert_close(score("great earnings beat expectations"), 0.9 / 2f64.sqrt());
        // terrible (-0.6) + risk (-0.2); "losses" is not in the lexicon
        assert_close(score("company faces terrible losses and risk"), -0.8 / 2f64.sqrt());
    }

    #[test]
    fn test_negation_attenuates_and_flips() {
        let s = score("not good results");
        assert_close(s, 0.3 * NEGATION_FACTOR);
        assert!(s < 0.0);
        assert!(s.abs() < 0.3);
    }

    #[test]
    fn test_intensifier_amplifies() {
        assert_close(score("very strong demand"), 0.4 * 1.3);
        assert!(score("extremely weak outlook") < score("weak outlook"));
    }

    #[test]
    fn test_only_immediate_predecessor_counts() {
        // "not" is two tokens away from "good"
        assert_close(score("not really good"), 0.3 * 1.2);
        assert_close(score("not a good quarter"), 0.3);
    }

    #[test]
    fn test_clamped_to_unit_interval() {
        let euphoric = "extremely excellent extremely outstanding extremely perfect";
        assert_close(score(euphoric), 1.0);

        let gloomy = "extremely terrible extremely awful extremely horrible";
        assert_close(score(gloomy), -1.0);
    }

    #[test]
    fn test_empty_and_neutral_text() {
        assert_eq!(score(""), 0.0);
        assert_eq!(score("   "), 0.0);
        assert_eq!(score("Quarterly report released on Tuesday"), 0.0);
    }

    #[test]
    fn test_tokenizer_splits_on_punctuation() {
        assert_eq!(
            tokenize("NVDA's rally--up 5%!"),
            vec!["nvda", "s", "rally", "up", "5"]
        );
        assert!(tokenize("...").is_empty());
    }

    #[test]
    fn test_score_bounds_over_mixed_corpus() {
        let corpus = [
            "no no no no bad",
            "very very very good",
            "without fail",
            "never crash never plunge never tumble",
            "up down up down up down",
            "€€€ ünïcödé gain",
        ];

        for text in corpus {
            let s = score(text);
            assert!((-1.0..=1.0).contains(&s), "{} out of bounds: {}", text, s);
        }
    }
}
