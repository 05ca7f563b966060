use crate::models::lot::Lot;
use crate::models::price::PriceTable;
use crate::models::valuation::PortfolioValuation;

/// Computes aggregate portfolio valuation from a lot snapshot and a
/// price table.
///
/// Pure business logic — no I/O, no hidden state. The result is fully
/// re-derivable from (lots, prices) and is recomputed on every call;
/// lot counts are expected to stay in the tens, so there is nothing to
/// maintain incrementally.
pub struct ValuationService;

impl ValuationService {
    pub fn new() -> Self {
        Self
    }

    /// Value the portfolio against current prices.
    ///
    /// A lot whose asset id has no entry in `prices` contributes zero to
    /// the current value — not an error, the total just undercounts until
    /// prices are available. An empty lot list yields all zeros.
    #[must_use]
    pub fn value(&self, lots: &[Lot], prices: &PriceTable) -> PortfolioValuation {
        if lots.is_empty() {
            return PortfolioValuation::default();
        }

        let mut initial_value = 0.0;
        let mut current_value = 0.0;
        for lot in lots {
            initial_value += lot.cost();
            current_value += lot.quantity * prices.get(&lot.asset_id).unwrap_or(0.0);
        }

        let change_value = current_value - initial_value;
        let change_percent = if initial_value == 0.0 {
            0.0
        } else {
            (change_value / initial_value) * 100.0
        };

        PortfolioValuation {
            initial_value,
            current_value,
            change_value,
            change_percent,
        }
    }
}

impl Default for ValuationService {
    fn default() -> Self {
        Self::new()
    }
}
