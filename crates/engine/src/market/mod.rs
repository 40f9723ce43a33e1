//! Session-level market service
//!
//! Owns the in-memory catalog — the single source of truth every derived
//! view reads from — plus the user's favorites and facet state. It is
//! constructed once per session and handed to consumers explicitly; there
//! is no ambient global.

use crate::aggregates::{self, DEFAULT_MARKET_CAP_CHANGE_24H, TOP_LIST_SIZE};
use crate::catalog::{CatalogGenerator, DEFAULT_CATALOG_SIZE};
use crate::facets::{self, FacetSelection};
use crate::reconcile::reconcile;
use kripto_core::{
    AltcoinSeasonData, Asset, FearGreedData, FeedSnapshot, GlobalStats, SortField, Timeframe,
};
use kripto_networking::FeedClient;
use kripto_persistence::Repository;
use tracing::{debug, instrument};

pub struct MarketService {
    client: FeedClient,
    repo: Repository,
    catalog: Vec<Asset>,
    stats: GlobalStats,
    favorites: Vec<String>,
    selection: FacetSelection,
    is_loading: bool,
    is_error: bool,
}

impl MarketService {
    /// Build a session with an entropy-seeded catalog
    pub async fn new(client: FeedClient, repo: Repository) -> Self {
        Self::from_generator(client, repo, CatalogGenerator::from_entropy()).await
    }

    /// Build a session with a fixed-seed catalog (reproducible)
    pub async fn with_seed(client: FeedClient, repo: Repository, seed: u64) -> Self {
        Self::from_generator(client, repo, CatalogGenerator::new(seed)).await
    }

    async fn from_generator(
        client: FeedClient,
        repo: Repository,
        mut generator: CatalogGenerator,
    ) -> Self {
        let catalog = generator.generate(DEFAULT_CATALOG_SIZE);
        let stats = aggregates::compute_global_stats(&catalog, DEFAULT_MARKET_CAP_CHANGE_24H);

        let favorites = repo.load_favorites().await;
        let selection = FacetSelection {
            timeframe: repo.load_timeframe().await,
            ..FacetSelection::default()
        };

        Self {
            client,
            repo,
            catalog,
            stats,
            favorites,
            selection,
            is_loading: false,
            is_error: false,
        }
    }

    // ── Catalog access ─────────────────────────────────────────────

    pub fn catalog(&self) -> &[Asset] {
        &self.catalog
    }

    pub fn asset(&self, id: &str) -> Option<&Asset> {
        self.catalog.iter().find(|a| a.id == id)
    }

    pub fn stats(&self) -> &GlobalStats {
        &self.stats
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    // ── Feed refresh ───────────────────────────────────────────────

    /// Fetch a snapshot and merge it in. The fetch is the only suspend
    /// point; a failed fetch leaves the previous catalog fully usable.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) {
        self.is_loading = true;
        let snapshot = self.client.fetch_snapshot().await;
        self.apply_snapshot(&snapshot);
        self.is_loading = false;
    }

    /// Merge an already-fetched snapshot. Split out from `refresh` so an
    /// embedding layer can fetch without holding the service exclusively.
    pub fn apply_snapshot(&mut self, snapshot: &FeedSnapshot) {
        self.is_error = !snapshot.success;
        if !snapshot.success {
            debug!("Snapshot failed; keeping previous catalog");
            return;
        }

        self.catalog = reconcile(&self.catalog, snapshot);
        self.stats =
            aggregates::compute_global_stats(&self.catalog, self.stats.market_cap_change_24h);
        debug!("Catalog reconciled against {} feed records", snapshot.result.len());
    }

    // ── Favorites ──────────────────────────────────────────────────

    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|f| f == id)
    }

    /// Flip an asset's favorite status and persist the list
    pub async fn toggle_favorite(&mut self, id: &str) {
        if let Some(index) = self.favorites.iter().position(|f| f == id) {
            self.favorites.remove(index);
        } else {
            self.favorites.push(id.to_string());
        }
        self.repo.save_favorites(&self.favorites).await;
    }

    // ── Facet state ────────────────────────────────────────────────

    pub fn selection(&self) -> &FacetSelection {
        &self.selection
    }

    pub fn set_search(&mut self, search: &str) {
        self.selection.search = search.to_string();
    }

    pub fn set_category(&mut self, category: &str) {
        self.selection.category = category.to_string();
    }

    pub fn set_zone(&mut self, zone: &str) {
        self.selection.zone = zone.to_string();
    }

    pub fn select_sort_field(&mut self, field: SortField) {
        self.selection.select_sort_field(field);
    }

    /// Change the display timeframe and persist the preference
    pub async fn set_timeframe(&mut self, timeframe: Timeframe) {
        self.selection.timeframe = timeframe;
        self.repo.save_timeframe(timeframe).await;
    }

    /// The filtered, sorted view for the market table
    pub fn filtered(&self) -> Vec<Asset> {
        facets::apply(&self.catalog, &self.selection)
    }

    // ── Derived views ──────────────────────────────────────────────

    pub fn top_gainers(&self) -> Vec<Asset> {
        aggregates::top_gainers(&self.catalog, TOP_LIST_SIZE)
    }

    pub fn top_losers(&self) -> Vec<Asset> {
        aggregates::top_losers(&self.catalog, TOP_LIST_SIZE)
    }

    pub fn top_volume(&self) -> Vec<Asset> {
        aggregates::top_volume(&self.catalog, TOP_LIST_SIZE)
    }

    pub fn trending(&self) -> Vec<Asset> {
        aggregates::trending(&self.catalog, TOP_LIST_SIZE)
    }

    pub fn new_listings(&self) -> Vec<Asset> {
        aggregates::new_listings(&self.catalog, TOP_LIST_SIZE)
    }

    pub fn altcoin_season(&self) -> AltcoinSeasonData {
        aggregates::altcoin_season(&self.catalog)
    }

    /// Fetch the fear/greed index (falls back to a fixed value offline)
    pub async fn fear_greed(&self) -> FearGreedData {
        self.client.fetch_fear_greed().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kripto_core::FeedAsset;
    use kripto_persistence::Database;
    use std::sync::Arc;

    async fn service() -> MarketService {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = Repository::new(Arc::new(db));
        MarketService::with_seed(FeedClient::new("test-key"), repo, 42).await
    }

    fn btc_snapshot(price: f64) -> FeedSnapshot {
        FeedSnapshot {
            success: true,
            result: vec![FeedAsset {
                symbol: "BTC".to_string(),
                name: "Bitcoin".to_string(),
                price: Some(price),
                change_1h: None,
                change_24h: Some(4.2),
                change_7d: None,
                volume: None,
                market_cap: None,
                circulating_supply: None,
                image: None,
            }],
        }
    }

    #[tokio::test]
    async fn test_session_starts_with_full_catalog() {
        let service = service().await;
        assert_eq!(service.catalog().len(), DEFAULT_CATALOG_SIZE);
        assert_eq!(service.stats().active_cryptos as usize, DEFAULT_CATALOG_SIZE);
        assert!(!service.is_loading());
        assert!(!service.is_error());
        assert!(service.asset("bitcoin").is_some());
    }

    #[tokio::test]
    async fn test_apply_snapshot_reconciles_and_recomputes() {
        let mut service = service().await;
        let old_total = service.stats().total_market_cap;

        service.apply_snapshot(&btc_snapshot(9_999_999.0));

        let btc = service.asset("bitcoin").unwrap();
        assert_eq!(btc.price, 9_999_999.0);
        assert_eq!(btc.change_24h, 4.2);
        assert!(!service.is_error());
        // Market cap untouched by this snapshot, so totals are stable
        assert_eq!(service.stats().total_market_cap, old_total);
    }

    #[tokio::test]
    async fn test_failed_snapshot_sets_flag_and_keeps_catalog() {
        let mut service = service().await;
        let price_before = service.asset("bitcoin").unwrap().price;

        service.apply_snapshot(&FeedSnapshot::failed());

        assert!(service.is_error());
        assert_eq!(service.asset("bitcoin").unwrap().price, price_before);

        // A later good snapshot clears the flag
        service.apply_snapshot(&btc_snapshot(1.0));
        assert!(!service.is_error());
    }

    #[tokio::test]
    async fn test_toggle_favorite_persists() {
        let db = Arc::new(Database::connect_in_memory().await.unwrap());
        let repo = Repository::new(db.clone());

        let mut service =
            MarketService::with_seed(FeedClient::new("test-key"), repo.clone(), 42).await;
        assert!(service.favorites().is_empty());

        service.toggle_favorite("bitcoin").await;
        assert!(service.is_favorite("bitcoin"));
        service.toggle_favorite("bitcoin").await;
        assert!(!service.is_favorite("bitcoin"));

        service.toggle_favorite("ethereum").await;
        let reloaded =
            MarketService::with_seed(FeedClient::new("test-key"), repo, 42).await;
        assert!(reloaded.is_favorite("ethereum"));
    }

    #[tokio::test]
    async fn test_facet_state_drives_filtered_view() {
        let mut service = service().await;
        service.set_search("bitcoin");
        let view = service.filtered();
        assert!(view.iter().any(|a| a.id == "bitcoin"));
        assert!(view.len() < service.catalog().len());

        service.set_search("");
        service.set_category("meme");
        assert!(service.filtered().iter().all(|a| a.has_tag("meme")));
    }

    #[tokio::test]
    async fn test_timeframe_preference_round_trips() {
        let db = Arc::new(Database::connect_in_memory().await.unwrap());
        let repo = Repository::new(db.clone());

        let mut service =
            MarketService::with_seed(FeedClient::new("test-key"), repo.clone(), 42).await;
        assert_eq!(service.selection().timeframe, Timeframe::H24);
        service.set_timeframe(Timeframe::D30).await;

        let reloaded =
            MarketService::with_seed(FeedClient::new("test-key"), repo, 42).await;
        assert_eq!(reloaded.selection().timeframe, Timeframe::D30);
    }

    #[tokio::test]
    async fn test_derived_views_have_bounded_size() {
        let service = service().await;
        assert!(service.top_gainers().len() <= TOP_LIST_SIZE);
        assert!(service.top_losers().len() <= TOP_LIST_SIZE);
        assert!(service.top_volume().len() <= TOP_LIST_SIZE);
        assert!(service.trending().len() <= TOP_LIST_SIZE);
        assert_eq!(service.new_listings().len(), TOP_LIST_SIZE);

        let season = service.altcoin_season();
        assert!(season.score <= 100);
        assert_eq!(season.total_altcoins as usize, DEFAULT_CATALOG_SIZE - 1);
    }
}
