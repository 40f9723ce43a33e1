//! Global market statistics

use serde::{Deserialize, Serialize};

/// Aggregate snapshot of the whole market
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStats {
    pub total_market_cap: f64,
    #[serde(rename = "totalVolume24h")]
    pub total_volume_24h: f64,
    /// Market-cap share of the top-ranked asset, in [0, 100]
    pub btc_dominance: f64,
    /// Market-cap share of the second-ranked asset, in [0, 100]
    pub eth_dominance: f64,
    pub active_cryptos: u32,
    pub markets: u32,
    /// Externally supplied; deriving it would need a historical snapshot
    #[serde(rename = "marketCapChange24h")]
    pub market_cap_change_24h: f64,
}
