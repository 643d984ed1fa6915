use std::collections::BTreeSet;

use crate::models::Stock;

/// Read-only in-memory listing of the sample universe.
///
/// Concurrent reads need no locking; nothing mutates the set after startup.
pub struct StockStore {
    stocks: Vec<Stock>,
}

impl StockStore {
    /// Build the store with the 20 seed NSE listings.
    pub fn seeded() -> Self {
        Self { stocks: seed_stocks() }
    }

    pub fn all(&self) -> &[Stock] {
        &self.stocks
    }

    pub fn get(&self, ticker: &str) -> Option<&Stock> {
        self.stocks.iter().find(|s| s.ticker == ticker)
    }

    /// Distinct sector names, sorted ascending.
    pub fn sectors(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.stocks.iter().map(|s| s.sector.as_str()).collect();
        set.into_iter().map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }
}

fn stock(ticker: &str, company_name: &str, market_cap: f64, sector: &str, latest_price: f64) -> Stock {
    Stock {
        ticker: ticker.to_string(),
        company_name: company_name.to_string(),
        market_cap,
        sector: sector.to_string(),
        latest_price,
    }
}

fn seed_stocks() -> Vec<Stock> {
    vec![
        stock("RELIANCE", "Reliance Industries Ltd", 1_654_238.45, "Oil & Gas", 2456.80),
        stock("TCS", "Tata Consultancy Services", 1_298_756.23, "IT Services", 3542.15),
        stock("HDFCBANK", "HDFC Bank Limited", 1_187_435.67, "Banking", 1587.90),
        stock("BHARTIARTL", "Bharti Airtel Limited", 698_234.12, "Telecommunications", 1254.75),
        stock("ICICIBANK", "ICICI Bank Limited", 856_789.34, "Banking", 1234.56),
        stock("INFY", "Infosys Limited", 754_321.89, "IT Services", 1789.45),
        stock("ITC", "ITC Limited", 567_892.12, "Consumer Goods", 456.78),
        stock("HINDUNILVR", "Hindustan Unilever Limited", 589_234.56, "Consumer Goods", 2487.63),
        stock("LT", "Larsen & Toubro Limited", 234_567.89, "Engineering", 1678.90),
        stock("SBIN", "State Bank of India", 456_789.23, "Banking", 512.34),
        stock("AXISBANK", "Axis Bank Limited", 345_678.91, "Banking", 1143.27),
        stock("WIPRO", "Wipro Limited", 289_456.78, "IT Services", 456.89),
        stock("ASIANPAINT", "Asian Paints Limited", 298_765.43, "Consumer Goods", 3123.45),
        stock("MARUTI", "Maruti Suzuki India Limited", 267_894.56, "Automobile", 8756.23),
        stock("SUNPHARMA", "Sun Pharmaceutical Industries", 198_765.43, "Pharmaceuticals", 834.56),
        stock("BAJFINANCE", "Bajaj Finance Limited", 423_567.89, "Financial Services", 6894.35),
        stock("M&M", "Mahindra & Mahindra Limited", 156_789.12, "Automobile", 1267.89),
        stock("TECHM", "Tech Mahindra Limited", 134_567.89, "IT Services", 1398.76),
        stock("NTPC", "NTPC Limited", 234_567.12, "Power", 241.56),
        stock("POWERGRID", "Power Grid Corporation", 189_234.56, "Power", 213.45),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_twenty_tickers() {
        let store = StockStore::seeded();
        assert_eq!(store.len(), 20);
    }

    #[test]
    fn test_get_known_and_unknown_ticker() {
        let store = StockStore::seeded();
        assert_eq!(store.get("TCS").unwrap().sector, "IT Services");
        assert!(store.get("UNKNOWNTICKER").is_none());
    }

    #[test]
    fn test_sectors_sorted_and_deduplicated() {
        let store = StockStore::seeded();
        let sectors = store.sectors();

        let mut sorted = sectors.clone();
        sorted.sort();
        assert_eq!(sectors, sorted);

        let unique: BTreeSet<&String> = sectors.iter().collect();
        assert_eq!(unique.len(), sectors.len());
        assert!(sectors.contains(&"Banking".to_string()));
    }
}
