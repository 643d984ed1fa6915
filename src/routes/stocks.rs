use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{info, warn};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{
    AnalysisResponse, SectorsResponse, StockAnalysisRequest, StockDetailResponse, TopMoversParams,
    TopMoversResponse,
};
use crate::services::query_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sectors", get(sectors))
        .route("/top-movers", get(top_movers))
        .route("/analysis", post(analysis))
        .route("/:ticker", get(stock_detail))
}

async fn sectors(State(state): State<AppState>, _user: AuthUser) -> Json<SectorsResponse> {
    info!("GET /stocks/sectors");
    Json(SectorsResponse {
        success: true,
        sectors: state.stocks.sectors(),
    })
}

async fn top_movers(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<TopMoversParams>,
) -> Result<Json<TopMoversResponse>, AppError> {
    info!(
        "GET /stocks/top-movers - period {} limit {}",
        params.period, params.limit
    );
    let analyzed = state.analysis.decorate_all(state.stocks.all());
    let (gainers, losers) = query_service::top_movers(&analyzed, params.period, params.limit)?;
    Ok(Json(TopMoversResponse {
        success: true,
        gainers,
        losers,
    }))
}

/// Filter, sort and summarize the analyzed universe.
async fn analysis(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(req): Json<StockAnalysisRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    info!(
        "POST /stocks/analysis - sector {:?} sort {} {:?}",
        req.sector, req.sort_by, req.sort_order
    );

    let analyzed = state.analysis.decorate_all(state.stocks.all());
    let filtered = query_service::filter_by_sector(analyzed, req.sector.as_deref());
    let mut filtered =
        query_service::filter_by_market_cap(filtered, req.market_cap_min, req.market_cap_max);

    query_service::sort_stocks(&mut filtered, &req.sort_by, req.sort_order)?;

    let summary = query_service::summarize(&filtered);
    Ok(Json(AnalysisResponse {
        success: true,
        data: filtered,
        summary,
    }))
}

async fn stock_detail(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(ticker): Path<String>,
) -> Result<Json<StockDetailResponse>, AppError> {
    info!("GET /stocks/{} - Fetching detail", ticker);
    let stock = state.stocks.get(&ticker).ok_or_else(|| {
        warn!("Unknown ticker requested: {}", ticker);
        AppError::NotFound("Stock".to_string())
    })?;

    Ok(Json(StockDetailResponse {
        success: true,
        data: state.analysis.detail(stock),
    }))
}
