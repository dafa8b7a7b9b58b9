// Ticker symbols
pub mod ticker;

// Headlines and feed items
pub mod news;

// Sentiment labels and analysis results
pub mod sentiment;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
