//! Shared data structures used throughout the application.

/// One exchange's price for a symbol, taken during a single scan cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub exchange: String,
    pub symbol: String,
    /// `None` when the fetch failed for any reason.
    pub price: Option<f64>,
}

impl Quote {
    pub fn new(exchange: impl Into<String>, symbol: impl Into<String>, price: Option<f64>) -> Self {
        Self {
            exchange: exchange.into(),
            symbol: symbol.into(),
            price: price.filter(|p| is_valid_price(*p)),
        }
    }
}

/// Only finite, strictly positive prices are usable.
pub fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

/// Counters for one pass over every configured symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleSummary {
    pub symbols_scanned: usize,
    pub opportunities: usize,
    pub notify_failures: usize,
}
