use std::sync::Arc;

use chrono::{Duration, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{
    AnalyzedStock, DataAvailability, Stock, StockAnalysis, StockDetail, CHANGE_PERIODS,
};

/// Produces the synthetic per-request analysis attached to every stock read.
///
/// The RNG sits behind a shared handle so request handlers draw from one
/// stream and tests can pin a seed for reproducible draws.
#[derive(Clone)]
pub struct AnalysisGenerator {
    rng: Arc<Mutex<StdRng>>,
}

impl AnalysisGenerator {
    pub fn new() -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::from_os_rng())),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    /// Attach freshly rolled analysis values to `stock`.
    ///
    /// The field shape is identical on every call; the values are not.
    pub fn decorate(&self, stock: &Stock) -> AnalyzedStock {
        let mut rng = self.rng.lock();

        let price_changes = CHANGE_PERIODS
            .iter()
            .map(|&period| (period, round2(rng.random_range(-15.0..=15.0))))
            .collect();

        let analysis = StockAnalysis {
            price_changes,
            latest_price_date: (Utc::now() - Duration::days(rng.random_range(0..=2)))
                .date_naive(),
            data_completeness: round1(rng.random_range(75.0..=100.0)),
            days_with_price: rng.random_range(25..=30),
            total_days: 30,
        };

        AnalyzedStock {
            stock: stock.clone(),
            analysis,
        }
    }

    pub fn decorate_all(&self, stocks: &[Stock]) -> Vec<AnalyzedStock> {
        stocks.iter().map(|s| self.decorate(s)).collect()
    }

    /// Single-stock detail page: analysis plus synthetic company color.
    pub fn detail(&self, stock: &Stock) -> StockDetail {
        let analyzed = self.decorate(stock);
        let mut rng = self.rng.lock();

        StockDetail {
            description: format!(
                "{} is a leading company in the {} sector.",
                stock.company_name, stock.sector
            ),
            products: vec![
                "Product A".to_string(),
                "Product B".to_string(),
                "Product C".to_string(),
            ],
            promoters: vec!["Promoter 1".to_string(), "Promoter 2".to_string()],
            promoter_share: round2(rng.random_range(40.0..=75.0)),
            debt: round2(rng.random_range(1000.0..=50000.0)),
            employees: rng.random_range(1000..=100_000),
            founded: rng.random_range(1950..=2000),
            analyzed,
        }
    }
}

impl Default for AnalysisGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Dataset window reported by the availability endpoint. Wall-clock derived;
/// there is no real dataset behind it.
pub fn availability() -> DataAvailability {
    let end = Utc::now();
    let start = end - Duration::days(365);

    DataAvailability {
        success: true,
        start_date: start.date_naive(),
        end_date: end.date_naive(),
        total_days: 365,
        last_updated: end.date_naive(),
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stock() -> Stock {
        Stock {
            ticker: "TCS".to_string(),
            company_name: "Tata Consultancy Services".to_string(),
            market_cap: 1_298_756.23,
            sector: "IT Services".to_string(),
            latest_price: 3542.15,
        }
    }

    #[test]
    fn test_decorate_values_stay_in_range() {
        let generator = AnalysisGenerator::seeded(7);
        let stock = sample_stock();

        // Values are re-rolled per call, so assert ranges over many draws
        for _ in 0..200 {
            let analyzed = generator.decorate(&stock);
            let analysis = &analyzed.analysis;

            assert_eq!(analysis.price_changes.len(), CHANGE_PERIODS.len());
            for (&period, &change) in &analysis.price_changes {
                assert!(CHANGE_PERIODS.contains(&period));
                assert!((-15.0..=15.0).contains(&change), "change {} out of range", change);
            }
            assert!((75.0..=100.0).contains(&analysis.data_completeness));
            assert!((25..=30).contains(&analysis.days_with_price));
            assert_eq!(analysis.total_days, 30);

            let age = Utc::now().date_naive() - analysis.latest_price_date;
            assert!((0..=2).contains(&age.num_days()));
        }
    }

    #[test]
    fn test_decorate_preserves_listing_fields() {
        let generator = AnalysisGenerator::seeded(7);
        let stock = sample_stock();
        let analyzed = generator.decorate(&stock);

        assert_eq!(analyzed.stock.ticker, "TCS");
        assert_eq!(analyzed.stock.sector, "IT Services");
        assert_eq!(analyzed.stock.market_cap, stock.market_cap);
    }

    #[test]
    fn test_seeded_generators_agree() {
        let stock = sample_stock();
        let a = AnalysisGenerator::seeded(42).decorate(&stock);
        let b = AnalysisGenerator::seeded(42).decorate(&stock);
        assert_eq!(a.analysis.price_changes, b.analysis.price_changes);
        assert_eq!(a.analysis.data_completeness, b.analysis.data_completeness);
    }

    #[test]
    fn test_detail_extras_in_range() {
        let generator = AnalysisGenerator::seeded(7);
        let detail = generator.detail(&sample_stock());

        assert!((40.0..=75.0).contains(&detail.promoter_share));
        assert!((1000.0..=50000.0).contains(&detail.debt));
        assert!((1000..=100_000).contains(&detail.employees));
        assert!((1950..=2000).contains(&detail.founded));
        assert!(detail.description.contains("IT Services"));
    }

    #[test]
    fn test_availability_window_is_one_year() {
        let availability = availability();
        let span = availability.end_date - availability.start_date;
        assert_eq!(span.num_days(), 365);
        assert_eq!(availability.total_days, 365);
        assert!(availability.success);
    }
}
