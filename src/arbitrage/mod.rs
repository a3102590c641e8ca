pub mod evaluator;
pub mod types;

pub use evaluator::{evaluate_spread, spread_percent};
pub use types::{ArbitrageOpportunity, SpreadConfig};
