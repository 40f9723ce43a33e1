//! Portfolio holding model

use serde::{Deserialize, Serialize};

/// A user's position in one asset.
///
/// At most one holding exists per asset id; a repeat purchase merges into
/// the existing entry with a quantity-weighted average buy price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    #[serde(rename = "coinId")]
    pub asset_id: String,
    pub quantity: f64,
    /// Average price per unit at purchase, in TRY
    pub buy_price: f64,
    /// Unix timestamp in milliseconds
    pub added_at: i64,
}

impl Holding {
    /// Current value of the position at the given price
    pub fn value_at(&self, current_price: f64) -> f64 {
        self.quantity * current_price
    }

    /// Cost basis of the position
    pub fn cost_basis(&self) -> f64 {
        self.quantity * self.buy_price
    }

    /// Profit/loss percentage at the given price
    pub fn pnl_percent(&self, current_price: f64) -> f64 {
        if self.buy_price == 0.0 {
            return 0.0;
        }
        ((current_price - self.buy_price) / self.buy_price) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pnl_percent() {
        let holding = Holding {
            asset_id: "bitcoin".into(),
            quantity: 2.0,
            buy_price: 100.0,
            added_at: 0,
        };
        assert_eq!(holding.value_at(150.0), 300.0);
        assert_eq!(holding.cost_basis(), 200.0);
        assert_eq!(holding.pnl_percent(150.0), 50.0);
    }

    #[test]
    fn test_pnl_with_zero_buy_price() {
        let holding = Holding {
            asset_id: "x".into(),
            quantity: 1.0,
            buy_price: 0.0,
            added_at: 0,
        };
        assert_eq!(holding.pnl_percent(10.0), 0.0);
    }
}
