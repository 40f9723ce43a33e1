//! Portfolio holdings and valuation
//!
//! One holding per asset id; a repeat purchase merges into the existing
//! entry at the quantity-weighted average price. Every mutation persists
//! through the repository.

use kripto_core::{Asset, Error, Holding, Result};
use kripto_persistence::Repository;
use serde::Serialize;

/// Per-session portfolio state
pub struct PortfolioManager {
    repo: Repository,
    holdings: Vec<Holding>,
}

/// Valuation of one position against the live catalog
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionValuation {
    pub asset_id: String,
    pub quantity: f64,
    pub buy_price: f64,
    pub current_price: f64,
    pub value: f64,
    pub pnl_absolute: f64,
    pub pnl_percent: f64,
}

/// Valuation of the whole portfolio
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuation {
    pub positions: Vec<PositionValuation>,
    pub total_value: f64,
    pub total_cost: f64,
    pub pnl_absolute: f64,
    pub pnl_percent: f64,
}

impl PortfolioManager {
    /// Load persisted holdings
    pub async fn load(repo: Repository) -> Self {
        let holdings = repo.load_holdings().await;
        Self { repo, holdings }
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn get(&self, asset_id: &str) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.asset_id == asset_id)
    }

    /// Record a purchase. Merges into an existing holding by computing a
    /// quantity-weighted average buy price.
    pub async fn add(&mut self, asset_id: &str, quantity: f64, buy_price: f64) -> Result<()> {
        validate_entry(quantity, buy_price)?;

        match self.holdings.iter_mut().find(|h| h.asset_id == asset_id) {
            Some(existing) => {
                let total_value = existing.quantity * existing.buy_price + quantity * buy_price;
                let total_quantity = existing.quantity + quantity;
                existing.buy_price = total_value / total_quantity;
                existing.quantity = total_quantity;
            }
            None => {
                self.holdings.push(Holding {
                    asset_id: asset_id.to_string(),
                    quantity,
                    buy_price,
                    added_at: chrono::Utc::now().timestamp_millis(),
                });
            }
        }

        self.repo.save_holdings(&self.holdings).await;
        Ok(())
    }

    /// Overwrite a holding's quantity, and buy price when given
    pub async fn update(
        &mut self,
        asset_id: &str,
        quantity: f64,
        buy_price: Option<f64>,
    ) -> Result<()> {
        validate_entry(quantity, buy_price.unwrap_or(0.0))?;

        let holding = self
            .holdings
            .iter_mut()
            .find(|h| h.asset_id == asset_id)
            .ok_or_else(|| Error::AssetNotFound(asset_id.to_string()))?;

        holding.quantity = quantity;
        if let Some(price) = buy_price {
            holding.buy_price = price;
        }

        self.repo.save_holdings(&self.holdings).await;
        Ok(())
    }

    /// Remove a holding entirely
    pub async fn remove(&mut self, asset_id: &str) {
        self.holdings.retain(|h| h.asset_id != asset_id);
        self.repo.save_holdings(&self.holdings).await;
    }

    /// Drop every holding
    pub async fn clear(&mut self) {
        self.holdings.clear();
        self.repo.save_holdings(&self.holdings).await;
    }

    /// Value the portfolio against the current catalog. Holdings whose
    /// asset is missing from the catalog are valued at zero but keep
    /// their cost basis.
    pub fn valuation(&self, catalog: &[Asset]) -> PortfolioValuation {
        let positions: Vec<PositionValuation> = self
            .holdings
            .iter()
            .map(|holding| {
                let current_price = catalog
                    .iter()
                    .find(|a| a.id == holding.asset_id)
                    .map(|a| a.price)
                    .unwrap_or(0.0);

                PositionValuation {
                    asset_id: holding.asset_id.clone(),
                    quantity: holding.quantity,
                    buy_price: holding.buy_price,
                    current_price,
                    value: holding.value_at(current_price),
                    pnl_absolute: holding.value_at(current_price) - holding.cost_basis(),
                    pnl_percent: holding.pnl_percent(current_price),
                }
            })
            .collect();

        let total_value: f64 = positions.iter().map(|p| p.value).sum();
        let total_cost: f64 = self.holdings.iter().map(|h| h.cost_basis()).sum();
        let pnl_absolute = total_value - total_cost;
        let pnl_percent = if total_cost > 0.0 {
            pnl_absolute / total_cost * 100.0
        } else {
            0.0
        };

        PortfolioValuation {
            positions,
            total_value,
            total_cost,
            pnl_absolute,
            pnl_percent,
        }
    }
}

/// Reject invalid numeric entry at the boundary; prior state is retained
fn validate_entry(quantity: f64, buy_price: f64) -> Result<()> {
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(Error::InvalidInput(format!("quantity must be > 0, got {}", quantity)));
    }
    if !buy_price.is_finite() || buy_price < 0.0 {
        return Err(Error::InvalidInput(format!("buy price must be >= 0, got {}", buy_price)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogGenerator;
    use kripto_persistence::Database;
    use std::sync::Arc;

    async fn manager() -> PortfolioManager {
        let db = Database::connect_in_memory().await.unwrap();
        PortfolioManager::load(Repository::new(Arc::new(db))).await
    }

    #[tokio::test]
    async fn test_add_merges_with_weighted_average() {
        let mut portfolio = manager().await;
        portfolio.add("bitcoin", 2.0, 100.0).await.unwrap();
        portfolio.add("bitcoin", 2.0, 200.0).await.unwrap();

        assert_eq!(portfolio.holdings().len(), 1);
        let holding = portfolio.get("bitcoin").unwrap();
        assert_eq!(holding.quantity, 4.0);
        assert_eq!(holding.buy_price, 150.0);
    }

    #[tokio::test]
    async fn test_invalid_entry_is_rejected_and_state_kept() {
        let mut portfolio = manager().await;
        portfolio.add("bitcoin", 1.0, 100.0).await.unwrap();

        assert!(portfolio.add("bitcoin", 0.0, 100.0).await.is_err());
        assert!(portfolio.add("bitcoin", -1.0, 100.0).await.is_err());
        assert!(portfolio.add("bitcoin", f64::NAN, 100.0).await.is_err());
        assert!(portfolio.add("bitcoin", 1.0, -5.0).await.is_err());

        let holding = portfolio.get("bitcoin").unwrap();
        assert_eq!(holding.quantity, 1.0);
        assert_eq!(holding.buy_price, 100.0);
    }

    #[tokio::test]
    async fn test_update_and_remove() {
        let mut portfolio = manager().await;
        portfolio.add("ethereum", 3.0, 50.0).await.unwrap();

        portfolio.update("ethereum", 5.0, None).await.unwrap();
        assert_eq!(portfolio.get("ethereum").unwrap().quantity, 5.0);
        assert_eq!(portfolio.get("ethereum").unwrap().buy_price, 50.0);

        portfolio.update("ethereum", 5.0, Some(60.0)).await.unwrap();
        assert_eq!(portfolio.get("ethereum").unwrap().buy_price, 60.0);

        assert!(portfolio.update("missing", 1.0, None).await.is_err());

        portfolio.remove("ethereum").await;
        assert!(portfolio.get("ethereum").is_none());
    }

    #[tokio::test]
    async fn test_clear_empties_portfolio() {
        let mut portfolio = manager().await;
        portfolio.add("bitcoin", 1.0, 10.0).await.unwrap();
        portfolio.add("ethereum", 1.0, 10.0).await.unwrap();
        portfolio.clear().await;
        assert!(portfolio.holdings().is_empty());
    }

    #[tokio::test]
    async fn test_holdings_survive_reload() {
        let db = Arc::new(Database::connect_in_memory().await.unwrap());
        let repo = Repository::new(db.clone());

        let mut portfolio = PortfolioManager::load(repo.clone()).await;
        portfolio.add("cardano", 10.0, 38.0).await.unwrap();

        let reloaded = PortfolioManager::load(repo).await;
        assert_eq!(reloaded.holdings().len(), 1);
        assert_eq!(reloaded.get("cardano").unwrap().quantity, 10.0);
    }

    #[tokio::test]
    async fn test_valuation_against_catalog() {
        let mut portfolio = manager().await;
        let catalog = CatalogGenerator::new(1).generate(12);
        let btc_price = catalog[0].price;

        portfolio.add("bitcoin", 2.0, btc_price / 2.0).await.unwrap();
        let valuation = portfolio.valuation(&catalog);

        assert_eq!(valuation.positions.len(), 1);
        assert_eq!(valuation.total_value, 2.0 * btc_price);
        assert_eq!(valuation.total_cost, btc_price);
        assert!((valuation.pnl_percent - 100.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_valuation_with_unknown_asset_is_zero_value() {
        let mut portfolio = manager().await;
        portfolio.add("unlisted-999", 4.0, 25.0).await.unwrap();
        let valuation = portfolio.valuation(&[]);
        assert_eq!(valuation.total_value, 0.0);
        assert_eq!(valuation.total_cost, 100.0);
        assert_eq!(valuation.pnl_absolute, -100.0);
    }
}
