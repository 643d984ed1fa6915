use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::errors::AppError;
use crate::models::{AnalysisSummary, AnalyzedStock, MarketStats, SortOrder, CHANGE_PERIODS};

/// Completeness at or above this counts as "full data".
const FULL_DATA_THRESHOLD: f64 = 95.0;

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Keep stocks whose sector matches exactly. `None` keeps everything.
pub fn filter_by_sector(stocks: Vec<AnalyzedStock>, sector: Option<&str>) -> Vec<AnalyzedStock> {
    match sector {
        Some(wanted) => stocks
            .into_iter()
            .filter(|s| s.stock.sector == wanted)
            .collect(),
        None => stocks,
    }
}

/// Keep stocks inside the inclusive market-cap range. Each bound is
/// independently optional; a bound of 0.0 is a real bound, not "unset".
pub fn filter_by_market_cap(
    stocks: Vec<AnalyzedStock>,
    min: Option<f64>,
    max: Option<f64>,
) -> Vec<AnalyzedStock> {
    stocks
        .into_iter()
        .filter(|s| {
            min.map_or(true, |lo| s.stock.market_cap >= lo)
                && max.map_or(true, |hi| s.stock.market_cap <= hi)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortField {
    Ticker,
    CompanyName,
    Sector,
    MarketCap,
    LatestPrice,
    DataCompleteness,
    Change(u32),
}

/// Resolve a requested sort field against the fixed schema of sortable
/// fields. Unknown names are a validation error, never silently ignored.
fn parse_sort_field(name: &str) -> Result<SortField, AppError> {
    let field = match name {
        "ticker" => SortField::Ticker,
        "company_name" => SortField::CompanyName,
        "sector" => SortField::Sector,
        "market_cap" => SortField::MarketCap,
        "latest_price" => SortField::LatestPrice,
        "data_completeness" => SortField::DataCompleteness,
        other => {
            let period = other
                .strip_prefix("change_")
                .and_then(|rest| rest.strip_suffix('d'))
                .and_then(|digits| digits.parse::<u32>().ok())
                .filter(|p| CHANGE_PERIODS.contains(p));
            match period {
                Some(p) => SortField::Change(p),
                None => {
                    return Err(AppError::Validation(format!(
                        "Unsupported sort field: {}",
                        other
                    )))
                }
            }
        }
    };
    Ok(field)
}

/// Stable sort by the named field; `Desc` reverses the comparison.
pub fn sort_stocks(
    stocks: &mut [AnalyzedStock],
    sort_by: &str,
    order: SortOrder,
) -> Result<(), AppError> {
    let field = parse_sort_field(sort_by)?;

    stocks.sort_by(|a, b| {
        let ordering = compare_by(a, b, field);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    Ok(())
}

fn compare_by(a: &AnalyzedStock, b: &AnalyzedStock, field: SortField) -> Ordering {
    match field {
        SortField::Ticker => a.stock.ticker.cmp(&b.stock.ticker),
        SortField::CompanyName => a.stock.company_name.cmp(&b.stock.company_name),
        SortField::Sector => a.stock.sector.cmp(&b.stock.sector),
        SortField::MarketCap => a.stock.market_cap.total_cmp(&b.stock.market_cap),
        SortField::LatestPrice => a.stock.latest_price.total_cmp(&b.stock.latest_price),
        SortField::DataCompleteness => a
            .analysis
            .data_completeness
            .total_cmp(&b.analysis.data_completeness),
        SortField::Change(period) => a
            .change(period)
            .unwrap_or(0.0)
            .total_cmp(&b.change(period).unwrap_or(0.0)),
    }
}

// ---------------------------------------------------------------------------
// Top movers
// ---------------------------------------------------------------------------

/// Partition into gainers (change > 0, biggest first) and losers
/// (change < 0, most negative first), each truncated to `limit`.
/// Zero-change records land in neither list.
pub fn top_movers(
    stocks: &[AnalyzedStock],
    period: u32,
    limit: usize,
) -> Result<(Vec<AnalyzedStock>, Vec<AnalyzedStock>), AppError> {
    if !CHANGE_PERIODS.contains(&period) {
        return Err(AppError::Validation(format!(
            "Unsupported period: {} (expected one of {:?})",
            period, CHANGE_PERIODS
        )));
    }

    let change = |s: &AnalyzedStock| s.change(period).unwrap_or(0.0);

    let mut gainers: Vec<AnalyzedStock> =
        stocks.iter().filter(|s| change(s) > 0.0).cloned().collect();
    gainers.sort_by(|a, b| change(b).total_cmp(&change(a)));
    gainers.truncate(limit);

    let mut losers: Vec<AnalyzedStock> =
        stocks.iter().filter(|s| change(s) < 0.0).cloned().collect();
    losers.sort_by(|a, b| change(a).total_cmp(&change(b)));
    losers.truncate(limit);

    Ok((gainers, losers))
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// Completeness summary over a (possibly empty) result set.
pub fn summarize(stocks: &[AnalyzedStock]) -> AnalysisSummary {
    let total = stocks.len();
    let full = stocks
        .iter()
        .filter(|s| s.analysis.data_completeness >= FULL_DATA_THRESHOLD)
        .count();

    let avg = if total > 0 {
        let sum: f64 = stocks.iter().map(|s| s.analysis.data_completeness).sum();
        (sum / total as f64 * 10.0).round() / 10.0
    } else {
        0.0
    };

    AnalysisSummary {
        total_stocks: total,
        stocks_with_full_data: full,
        stocks_with_partial_data: total - full,
        avg_data_completeness: avg,
    }
}

/// Market-wide stats for the public overview, bucketing by 1-day change sign.
pub fn market_stats(stocks: &[AnalyzedStock]) -> MarketStats {
    let one_day = |s: &AnalyzedStock| s.change(1).unwrap_or(0.0);

    let gainers_count = stocks.iter().filter(|s| one_day(s) > 0.0).count();
    let losers_count = stocks.iter().filter(|s| one_day(s) < 0.0).count();

    let sectors: BTreeSet<&str> = stocks.iter().map(|s| s.stock.sector.as_str()).collect();

    let avg_market_cap = if stocks.is_empty() {
        0.0
    } else {
        let sum: f64 = stocks.iter().map(|s| s.stock.market_cap).sum();
        (sum / stocks.len() as f64 * 100.0).round() / 100.0
    };

    MarketStats {
        total: stocks.len(),
        gainers_count,
        losers_count,
        neutral_count: stocks.len() - gainers_count - losers_count,
        sectors_count: sectors.len(),
        avg_market_cap,
    }
}
