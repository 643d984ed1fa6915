mod stock;
mod user;

pub use stock::{
    AnalysisResponse, AnalysisSummary, AnalyzedStock, DataAvailability, MarketOverviewResponse,
    MarketStats, PreviewParams, SectorsResponse, SortOrder, Stock, StockAnalysis,
    StockAnalysisRequest, StockDetail, StockDetailResponse, TopMoversParams, TopMoversResponse,
    CHANGE_PERIODS,
};
pub use user::{AuthResponse, LoginRequest, MeResponse, RegisterRequest, User, UserInfo};
