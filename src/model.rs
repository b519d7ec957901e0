use serde::{Deserialize, Serialize};

/// One trading-day OHLCV record for a symbol, as served by the backend.
///
/// Upstream data is expected to satisfy `low <= open, close <= high`, but
/// nothing here checks it: display code has to cope with whatever arrives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSample {
    pub symbol: String,
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Market-wide snapshot used by the KPI cards. Always replaced wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOverview {
    pub total_volume: u64,
    pub top_gainer_symbol: String,
    pub top_gainer_change: f64,
    pub top_loser_symbol: String,
    pub top_loser_change: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_decodes_backend_json() {
        let raw = r#"{"symbol":"AAPL","date":"2024-03-01","open":179.5,"high":181.2,"low":178.9,"close":180.7,"volume":51234000}"#;
        let sample: StockSample = serde_json::from_str(raw).unwrap();

        assert_eq!(sample.symbol, "AAPL");
        assert_eq!(sample.date, "2024-03-01");
        assert_eq!(sample.close, 180.7);
        assert_eq!(sample.volume, 51_234_000);
    }

    #[test]
    fn sample_tolerates_inconsistent_ohlc() {
        // high below low still decodes; nothing validates it
        let raw = r#"{"symbol":"X","date":"2024-01-02","open":10.0,"high":5.0,"low":20.0,"close":30.0,"volume":0}"#;
        let sample: StockSample = serde_json::from_str(raw).unwrap();

        assert!(sample.high < sample.low);
    }

    #[test]
    fn negative_volume_is_rejected() {
        let raw = r#"{"symbol":"X","date":"2024-01-02","open":1.0,"high":1.0,"low":1.0,"close":1.0,"volume":-3}"#;
        assert!(serde_json::from_str::<StockSample>(raw).is_err());
    }

    #[test]
    fn overview_decodes_backend_json() {
        let raw = r#"{"total_volume":987654321,"top_gainer_symbol":"NVDA","top_gainer_change":4.21,"top_loser_symbol":"INTC","top_loser_change":-3.05}"#;
        let overview: MarketOverview = serde_json::from_str(raw).unwrap();

        assert_eq!(overview.total_volume, 987_654_321);
        assert_eq!(overview.top_gainer_symbol, "NVDA");
        assert_eq!(overview.top_loser_change, -3.05);
    }
}
