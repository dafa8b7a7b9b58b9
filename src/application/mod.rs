// Entry point: ticker analysis with caching
pub mod analysis_service;

// TTL cache with per-key single-flight
pub mod cache;

// Headline fallback chain
pub mod news;

// Lexicon scoring and labelling
pub mod sentiment;

pub use analysis_service::AnalysisService;
