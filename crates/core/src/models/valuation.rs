use serde::{Deserialize, Serialize};

/// Aggregate valuation of the portfolio against live prices.
///
/// The core computes these numbers — the frontend just renders them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioValuation {
    /// Sum of quantity × purchase price over all lots
    pub initial_value: f64,

    /// Sum of quantity × current price over all lots.
    /// Lots whose asset has no known price contribute zero, so the
    /// aggregate silently undercounts until prices are available.
    pub current_value: f64,

    /// current_value − initial_value
    pub change_value: f64,

    /// change_value / initial_value × 100, or 0 when nothing was invested
    pub change_percent: f64,
}
