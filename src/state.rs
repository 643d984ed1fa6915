use std::sync::Arc;

use crate::auth::TokenService;
use crate::services::analysis_service::AnalysisGenerator;
use crate::store::{StockStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub stocks: Arc<StockStore>,
    pub tokens: TokenService,
    pub analysis: AnalysisGenerator,
}
