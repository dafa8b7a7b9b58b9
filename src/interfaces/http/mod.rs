//! HTTP interface: axum router over [`AnalysisService`](crate::application::AnalysisService).

pub mod app;
pub mod error;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use error::{AppError, AppResult};
pub use state::AppState;
