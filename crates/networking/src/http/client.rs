//! Market-data feed client with cache-aware fetching
//!
//! The fetch path is: fresh cache entry → network → stale cache → explicit
//! failed snapshot. Transport and shape errors never cross this boundary;
//! callers always receive a `FeedSnapshot` they can reconcile or ignore.

use kripto_core::{
    Error, FearGreedData, FearGreedResponse, FeedAsset, FeedSnapshot, ProviderCoin, Result,
};
use kripto_persistence::SnapshotCache;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

const BASE_URL: &str = "https://api.coingecko.com/api/v3";
const FEAR_GREED_URL: &str = "https://api.alternative.me/fng/";

const MARKETS_ENDPOINT: &str = "/coins/markets";
// Top 100 in TRY with sparkline and 1h/24h/7d change percentages
const MARKETS_QUERY: &str = "?vs_currency=try&order=market_cap_desc&per_page=100&page=1&sparkline=true&price_change_percentage=1h,24h,7d";

/// HTTP client for the market-data provider.
///
/// Holds a shared snapshot cache; a fresh entry short-circuits the network
/// entirely, and the newest stale entry backs the failure path. Refreshes
/// for the markets endpoint are serialized so at most one request is in
/// flight at a time.
pub struct FeedClient {
    http: Client,
    api_key: String,
    cache: Arc<SnapshotCache>,
    /// Serializes market refreshes (no concurrent polls on one endpoint)
    refresh_lock: Mutex<()>,
}

impl FeedClient {
    /// Create a new client with the given provider API key
    pub fn new(api_key: &str) -> Self {
        Self::with_cache(api_key, Arc::new(SnapshotCache::default()))
    }

    /// Create a new client sharing an existing snapshot cache
    pub fn with_cache(api_key: &str, cache: Arc<SnapshotCache>) -> Self {
        let http = Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            api_key: api_key.to_string(),
            cache,
            refresh_lock: Mutex::new(()),
        }
    }

    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Cache key for the markets request (endpoint + query signature)
    fn markets_cache_key() -> String {
        format!("{}{}", MARKETS_ENDPOINT, MARKETS_QUERY)
    }

    /// Fetch the live market snapshot.
    ///
    /// Never errors: a fresh cache entry is returned without a network
    /// call; on network or shape failure the newest cached value is
    /// served regardless of age; with no cache at all an explicit failed
    /// snapshot is returned.
    #[instrument(skip(self))]
    pub async fn fetch_snapshot(&self) -> FeedSnapshot {
        let cache_key = Self::markets_cache_key();

        if let Some(snapshot) = self.cache.get_fresh(&cache_key) {
            debug!("Cache hit for {}", MARKETS_ENDPOINT);
            return snapshot;
        }

        // Hold the lock across the request; a second caller waiting here
        // will find the fresh entry on re-check instead of re-fetching.
        let _guard = self.refresh_lock.lock().await;
        if let Some(snapshot) = self.cache.get_fresh(&cache_key) {
            debug!("Cache filled while waiting for {}", MARKETS_ENDPOINT);
            return snapshot;
        }

        match self.request_markets().await {
            Ok(result) => {
                debug!("Feed returned {} assets", result.len());
                let snapshot = FeedSnapshot {
                    success: true,
                    result,
                };
                self.cache.insert(&cache_key, snapshot.clone());
                snapshot
            }
            Err(e) => {
                warn!("Feed request failed: {}", e);
                match self.cache.get_stale(&cache_key) {
                    Some(stale) => {
                        debug!("Serving stale snapshot for {}", MARKETS_ENDPOINT);
                        stale
                    }
                    None => FeedSnapshot::failed(),
                }
            }
        }
    }

    /// Perform the markets request against the provider
    async fn request_markets(&self) -> Result<Vec<FeedAsset>> {
        let url = format!(
            "{}{}{}&x_cg_demo_api_key={}",
            BASE_URL, MARKETS_ENDPOINT, MARKETS_QUERY, self.api_key
        );

        debug!("Requesting {}", MARKETS_ENDPOINT);

        let response = self
            .http
            .get(&url)
            .headers(self.default_headers())
            .send()
            .await?;

        let response = response
            .error_for_status()
            .map_err(|e| Error::ApiError(e.to_string()))?;

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::InvalidData(e.to_string()))?;

        parse_markets_body(body)
    }

    /// Fetch the Fear & Greed index.
    ///
    /// Falls back to a fixed neutral-fear value when the provider is
    /// unreachable or returns an unexpected shape.
    #[instrument(skip(self))]
    pub async fn fetch_fear_greed(&self) -> FearGreedData {
        match self.request_fear_greed().await {
            Ok(data) => data,
            Err(e) => {
                warn!("Fear/greed request failed: {}", e);
                fear_greed_fallback()
            }
        }
    }

    async fn request_fear_greed(&self) -> Result<FearGreedData> {
        let response = self
            .http
            .get(FEAR_GREED_URL)
            .headers(self.default_headers())
            .send()
            .await?;

        let response = response
            .error_for_status()
            .map_err(|e| Error::ApiError(e.to_string()))?;

        let parsed: FearGreedResponse = response
            .json()
            .await
            .map_err(|e| Error::InvalidData(e.to_string()))?;

        let entry = parsed
            .data
            .first()
            .ok_or_else(|| Error::InvalidData("empty fear/greed response".to_string()))?;

        let value: u32 = entry
            .value
            .parse()
            .map_err(|_| Error::InvalidData(format!("bad fear/greed value: {}", entry.value)))?;

        Ok(FearGreedData {
            value,
            value_classification: entry.value_classification.clone(),
            value_turkish: FearGreedData::turkish_classification(value).to_string(),
            timestamp: entry.timestamp.parse().unwrap_or(0),
            time_until_update: entry
                .time_until_update
                .as_deref()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
        })
    }

    /// Get a reference to the snapshot cache
    pub fn cache(&self) -> &Arc<SnapshotCache> {
        &self.cache
    }
}

/// Parse the provider body, which may be a bare array or an object
/// wrapping one under `result`/`data`
fn parse_markets_body(body: serde_json::Value) -> Result<Vec<FeedAsset>> {
    let items = match body {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut map) => match map.remove("result").or_else(|| map.remove("data")) {
            Some(serde_json::Value::Array(items)) => items,
            _ => return Err(Error::InvalidData("expected an asset array".to_string())),
        },
        _ => return Err(Error::InvalidData("expected an asset array".to_string())),
    };

    // Skip records that don't deserialize instead of failing the snapshot
    let assets = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<ProviderCoin>(item) {
            Ok(coin) => Some(FeedAsset::from(coin)),
            Err(e) => {
                debug!("Skipping malformed feed record: {}", e);
                None
            }
        })
        .collect();

    Ok(assets)
}

/// Fixed fallback when the fear/greed provider is unavailable
fn fear_greed_fallback() -> FearGreedData {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);

    FearGreedData {
        value: 27,
        value_classification: "Fear".to_string(),
        value_turkish: FearGreedData::turkish_classification(27).to_string(),
        timestamp: now,
        time_until_update: 3600,
    }
}
