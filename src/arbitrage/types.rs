/// Configuration for spread detection
#[derive(Debug, Clone)]
pub struct SpreadConfig {
    /// Minimum `(max - min) / min * 100` that counts as an opportunity.
    pub threshold_percent: f64,
}

/// Cross-exchange spread that met the threshold
#[derive(Debug, Clone, PartialEq)]
pub struct ArbitrageOpportunity {
    pub symbol: String,
    pub buy_exchange: String,
    pub buy_price: f64,
    pub sell_exchange: String,
    pub sell_price: f64,
    pub profit: f64,
    pub percent_diff: f64,
}
