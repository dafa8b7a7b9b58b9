use crate::domain::news::Headline;
use crate::domain::sentiment::AnalyzeResult;
use crate::interfaces::http::error::AppResult;
use crate::interfaces::http::state::AppState;
use axum::Json;
use axum::extract::{Path, State};

/// `GET /analyze/{ticker}` and its `/sentiment/{ticker}` alias.
pub async fn analyze(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> AppResult<Json<AnalyzeResult>> {
    let result = state.service.analyze(&ticker).await?;
    Ok(Json(result))
}

/// `GET /headlines/{ticker}`
pub async fn headlines(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> AppResult<Json<Vec<Headline>>> {
    let headlines = state.service.headlines(&ticker).await?;
    Ok(Json(headlines))
}
