use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Periods (in days) for which percent changes are reported.
pub const CHANGE_PERIODS: [u32; 6] = [1, 5, 10, 15, 20, 30];

/// Static listing data for a single ticker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stock {
    pub ticker: String,
    pub company_name: String,
    pub market_cap: f64,
    pub sector: String,
    pub latest_price: f64,
}

/// Synthetic per-request analysis attached to a stock.
///
/// Values are re-rolled on every read; only the field shape is stable.
#[derive(Debug, Clone, Serialize)]
pub struct StockAnalysis {
    /// Percent change keyed by period in days.
    pub price_changes: BTreeMap<u32, f64>,
    pub latest_price_date: NaiveDate,
    pub data_completeness: f64,
    pub days_with_price: u32,
    pub total_days: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzedStock {
    #[serde(flatten)]
    pub stock: Stock,
    #[serde(flatten)]
    pub analysis: StockAnalysis,
}

impl AnalyzedStock {
    /// Percent change for `period`, if that period was generated.
    pub fn change(&self, period: u32) -> Option<f64> {
        self.analysis.price_changes.get(&period).copied()
    }
}

/// Extra color for the single-stock detail page. All synthetic.
#[derive(Debug, Clone, Serialize)]
pub struct StockDetail {
    #[serde(flatten)]
    pub analyzed: AnalyzedStock,
    pub description: String,
    pub products: Vec<String>,
    pub promoters: Vec<String>,
    pub promoter_share: f64,
    pub debt: f64,
    pub employees: u32,
    pub founded: u32,
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// POST body for the analysis endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StockAnalysisRequest {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    #[serde(default)]
    pub sort_order: SortOrder,
    pub market_cap_min: Option<f64>,
    pub market_cap_max: Option<f64>,
    pub sector: Option<String>,
}

fn default_sort_by() -> String {
    "market_cap".to_string()
}

impl Default for StockAnalysisRequest {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            sort_by: default_sort_by(),
            sort_order: SortOrder::Desc,
            market_cap_min: None,
            market_cap_max: None,
            sector: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TopMoversParams {
    #[serde(default = "default_period")]
    pub period: u32,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_period() -> u32 {
    1
}

fn default_limit() -> usize {
    10
}

#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    #[serde(default = "default_preview_limit")]
    pub limit: usize,
}

fn default_preview_limit() -> usize {
    3
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct AnalysisSummary {
    pub total_stocks: usize,
    pub stocks_with_full_data: usize,
    pub stocks_with_partial_data: usize,
    pub avg_data_completeness: f64,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub data: Vec<AnalyzedStock>,
    pub summary: AnalysisSummary,
}

#[derive(Debug, Serialize)]
pub struct TopMoversResponse {
    pub success: bool,
    pub gainers: Vec<AnalyzedStock>,
    pub losers: Vec<AnalyzedStock>,
}

#[derive(Debug, Serialize)]
pub struct SectorsResponse {
    pub success: bool,
    pub sectors: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MarketStats {
    pub total: usize,
    pub gainers_count: usize,
    pub losers_count: usize,
    pub neutral_count: usize,
    pub sectors_count: usize,
    pub avg_market_cap: f64,
}

#[derive(Debug, Serialize)]
pub struct MarketOverviewResponse {
    pub success: bool,
    pub stats: MarketStats,
    pub sectors: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DataAvailability {
    pub success: bool,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: u32,
    pub last_updated: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct StockDetailResponse {
    pub success: bool,
    pub data: StockDetail,
}
