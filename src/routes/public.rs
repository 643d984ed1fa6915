use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::errors::AppError;
use crate::models::{MarketOverviewResponse, PreviewParams, TopMoversResponse};
use crate::services::query_service;
use crate::state::AppState;

/// Routes reachable without a bearer token.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/top-movers-preview", get(top_movers_preview))
        .route("/market-overview", get(market_overview))
}

/// Small unauthenticated teaser of the top-movers endpoint.
async fn top_movers_preview(
    State(state): State<AppState>,
    Query(params): Query<PreviewParams>,
) -> Result<Json<TopMoversResponse>, AppError> {
    info!("GET /public/top-movers-preview - limit {}", params.limit);
    let analyzed = state.analysis.decorate_all(state.stocks.all());
    let (gainers, losers) = query_service::top_movers(&analyzed, 1, params.limit)?;
    Ok(Json(TopMoversResponse {
        success: true,
        gainers,
        losers,
    }))
}

async fn market_overview(
    State(state): State<AppState>,
) -> Result<Json<MarketOverviewResponse>, AppError> {
    info!("GET /public/market-overview");
    let analyzed = state.analysis.decorate_all(state.stocks.all());
    let stats = query_service::market_stats(&analyzed);

    let mut sectors = state.stocks.sectors();
    sectors.truncate(8);

    Ok(Json(MarketOverviewResponse {
        success: true,
        stats,
        sectors,
    }))
}
