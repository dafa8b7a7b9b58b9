//! Headline sentiment: lexicon scoring and label classification.

pub mod classifier;
pub mod lexicon;

pub use classifier::{label, round_score};
pub use lexicon::score;
