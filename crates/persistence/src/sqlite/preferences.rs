//! Typed repository over the kv store, one key per concern

use crate::sqlite::{kv, Database};
use kripto_core::{CookieConsent, Currency, Holding, Theme, Timeframe, VoteType};
use std::collections::HashMap;
use std::sync::Arc;

/// Storage keys, one per persisted concern
pub const KEY_FAVORITES: &str = "kripto-paralar-favorites";
pub const KEY_PORTFOLIO: &str = "kripto-paralar-portfolio";
pub const KEY_SENTIMENT: &str = "kripto-paralar-sentiment";
pub const KEY_CURRENCY: &str = "kripto-paralar-currency";
pub const KEY_TIMEFRAME: &str = "kripto-paralar-timeframe";
pub const KEY_THEME: &str = "kripto-paralar-theme";
pub const KEY_COOKIE_CONSENT: &str = "cookie-consent";

/// Typed accessors for user state.
///
/// Every load falls back to the documented default when the key is absent
/// or its payload is malformed; every save is fire-and-forget.
#[derive(Clone)]
pub struct Repository {
    db: Arc<Database>,
}

impl Repository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Favorited asset ids, default empty
    pub async fn load_favorites(&self) -> Vec<String> {
        kv::load(self.db.pool(), KEY_FAVORITES).await.unwrap_or_default()
    }

    pub async fn save_favorites(&self, favorites: &[String]) {
        kv::save(self.db.pool(), KEY_FAVORITES, &favorites).await;
    }

    /// Portfolio holdings, default empty
    pub async fn load_holdings(&self) -> Vec<Holding> {
        kv::load(self.db.pool(), KEY_PORTFOLIO).await.unwrap_or_default()
    }

    pub async fn save_holdings(&self, holdings: &[Holding]) {
        kv::save(self.db.pool(), KEY_PORTFOLIO, &holdings).await;
    }

    /// The user's sentiment votes by asset id, default empty
    pub async fn load_votes(&self) -> HashMap<String, VoteType> {
        kv::load(self.db.pool(), KEY_SENTIMENT).await.unwrap_or_default()
    }

    pub async fn save_votes(&self, votes: &HashMap<String, VoteType>) {
        kv::save(self.db.pool(), KEY_SENTIMENT, votes).await;
    }

    /// Display currency, default TRY
    pub async fn load_currency(&self) -> Currency {
        kv::load(self.db.pool(), KEY_CURRENCY).await.unwrap_or_default()
    }

    pub async fn save_currency(&self, currency: Currency) {
        kv::save(self.db.pool(), KEY_CURRENCY, &currency).await;
    }

    /// Display timeframe, default 24h
    pub async fn load_timeframe(&self) -> Timeframe {
        kv::load(self.db.pool(), KEY_TIMEFRAME).await.unwrap_or_default()
    }

    pub async fn save_timeframe(&self, timeframe: Timeframe) {
        kv::save(self.db.pool(), KEY_TIMEFRAME, &timeframe).await;
    }

    /// UI theme, default dark
    pub async fn load_theme(&self) -> Theme {
        kv::load(self.db.pool(), KEY_THEME).await.unwrap_or_default()
    }

    pub async fn save_theme(&self, theme: Theme) {
        kv::save(self.db.pool(), KEY_THEME, &theme).await;
    }

    /// Cookie consent; `None` until the user answers the banner
    pub async fn load_cookie_consent(&self) -> Option<CookieConsent> {
        kv::load(self.db.pool(), KEY_COOKIE_CONSENT).await
    }

    pub async fn save_cookie_consent(&self, consent: CookieConsent) {
        kv::save(self.db.pool(), KEY_COOKIE_CONSENT, &consent).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repo() -> Repository {
        let db = Database::connect_in_memory().await.unwrap();
        Repository::new(Arc::new(db))
    }

    #[tokio::test]
    async fn test_defaults_when_empty() {
        let repo = repo().await;
        assert!(repo.load_favorites().await.is_empty());
        assert!(repo.load_holdings().await.is_empty());
        assert!(repo.load_votes().await.is_empty());
        assert_eq!(repo.load_currency().await, Currency::Try);
        assert_eq!(repo.load_timeframe().await, Timeframe::H24);
        assert_eq!(repo.load_theme().await, Theme::Dark);
        assert_eq!(repo.load_cookie_consent().await, None);
    }

    #[tokio::test]
    async fn test_favorites_roundtrip() {
        let repo = repo().await;
        let favorites = vec!["bitcoin".to_string(), "ethereum".to_string()];
        repo.save_favorites(&favorites).await;
        assert_eq!(repo.load_favorites().await, favorites);
    }

    #[tokio::test]
    async fn test_corrupted_favorites_fall_back_to_default() {
        let repo = repo().await;
        sqlx::query("INSERT INTO kv (key, value) VALUES (?, '{{{')")
            .bind(KEY_FAVORITES)
            .execute(repo.db.pool())
            .await
            .unwrap();
        assert!(repo.load_favorites().await.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_enum_payload_falls_back_to_default() {
        let repo = repo().await;
        sqlx::query("INSERT INTO kv (key, value) VALUES (?, '\"GBP\"')")
            .bind(KEY_CURRENCY)
            .execute(repo.db.pool())
            .await
            .unwrap();
        assert_eq!(repo.load_currency().await, Currency::Try);
    }

    #[tokio::test]
    async fn test_votes_roundtrip() {
        let repo = repo().await;
        let mut votes = HashMap::new();
        votes.insert("dogecoin".to_string(), VoteType::Bullish);
        repo.save_votes(&votes).await;
        let loaded = repo.load_votes().await;
        assert_eq!(loaded.get("dogecoin"), Some(&VoteType::Bullish));
    }

    #[tokio::test]
    async fn test_cookie_consent_persists() {
        let repo = repo().await;
        repo.save_cookie_consent(CookieConsent::Rejected).await;
        assert_eq!(repo.load_cookie_consent().await, Some(CookieConsent::Rejected));
    }
}
