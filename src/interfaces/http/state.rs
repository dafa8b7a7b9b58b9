use crate::application::AnalysisService;
use crate::infrastructure::observability::Metrics;
use std::sync::Arc;

/// Shared handler state. Cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AnalysisService>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(service: Arc<AnalysisService>) -> Self {
        let metrics = service.metrics().clone();
        Self { service, metrics }
    }
}
