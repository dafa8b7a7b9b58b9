pub mod core;
pub mod factory;
pub mod news;
pub mod observability;

pub use factory::SourceFactory;
