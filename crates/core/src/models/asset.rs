//! Asset catalog models

use crate::types::Timeframe;
use serde::{Deserialize, Serialize};

/// One tradable instrument in the catalog.
///
/// Prices and aggregates are stored in TRY, the canonical currency.
/// Live numeric fields (price, changes, market cap, volume, supply) are
/// overwritten by feed reconciliation; everything else is set at catalog
/// construction and never mutated by the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Unique across the whole catalog (`name-rank` for generated entries)
    pub id: String,
    pub rank: u32,
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub price: f64,
    #[serde(rename = "change1h")]
    pub change_1h: f64,
    #[serde(rename = "change24h")]
    pub change_24h: f64,
    #[serde(rename = "change7d")]
    pub change_7d: f64,
    #[serde(rename = "change30d")]
    pub change_30d: f64,
    #[serde(rename = "change1y")]
    pub change_1y: f64,
    pub market_cap: f64,
    #[serde(rename = "volume24h")]
    pub volume_24h: f64,
    pub circulating_supply: f64,
    /// Recent price points for the mini chart, oldest first
    pub sparkline: Vec<f64>,
    /// Category tags; shared vocabulary for category and zone filters
    #[serde(rename = "category")]
    pub categories: Vec<String>,
    /// SEO summary (Turkish on the curated head)
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub socials: Option<Socials>,

    // Archetype-specific data, populated per category at creation
    #[serde(default)]
    pub tvl: Option<f64>,
    #[serde(default)]
    pub apy: Option<f64>,
    #[serde(default)]
    pub max_supply: Option<f64>,
    #[serde(default)]
    pub hashrate: Option<String>,
    #[serde(default)]
    pub dominance: Option<f64>,
    #[serde(default)]
    pub sentiment_score: Option<u32>,
    #[serde(default)]
    pub whale_activity: Option<u32>,
    #[serde(default)]
    pub developer_activity: Option<u32>,
}

impl Asset {
    /// Percentage change at the given timeframe.
    ///
    /// An exact projection: requesting 7d returns `change_7d`, never a
    /// silent 24h fallback.
    pub fn change_for(&self, timeframe: Timeframe) -> f64 {
        match timeframe {
            Timeframe::H1 => self.change_1h,
            Timeframe::H24 => self.change_24h,
            Timeframe::D7 => self.change_7d,
            Timeframe::D30 => self.change_30d,
            Timeframe::Y1 => self.change_1y,
        }
    }

    /// Check membership in the shared category/zone tag set
    pub fn has_tag(&self, tag: &str) -> bool {
        self.categories.iter().any(|c| c == tag)
    }
}

/// Social links for curated assets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset_with_changes() -> Asset {
        Asset {
            id: "bitcoin".into(),
            rank: 1,
            name: "Bitcoin".into(),
            symbol: "BTC".into(),
            image: String::new(),
            price: 3_927_500.0,
            change_1h: 0.12,
            change_24h: 2.35,
            change_7d: -1.24,
            change_30d: 15.67,
            change_1y: 142.35,
            market_cap: 78e12,
            volume_24h: 1.7e12,
            circulating_supply: 19_850_000.0,
            sparkline: vec![1.0; 24],
            categories: vec!["layer-1".into(), "pow".into()],
            description: None,
            socials: None,
            tvl: None,
            apy: None,
            max_supply: Some(21_000_000.0),
            hashrate: Some("650 EH/s".into()),
            dominance: Some(58.4),
            sentiment_score: None,
            whale_activity: None,
            developer_activity: None,
        }
    }

    #[test]
    fn test_change_projection_is_exact() {
        let asset = asset_with_changes();
        assert_eq!(asset.change_for(Timeframe::H1), 0.12);
        assert_eq!(asset.change_for(Timeframe::H24), 2.35);
        assert_eq!(asset.change_for(Timeframe::D7), -1.24);
        assert_eq!(asset.change_for(Timeframe::D30), 15.67);
        assert_eq!(asset.change_for(Timeframe::Y1), 142.35);
    }

    #[test]
    fn test_tag_membership() {
        let asset = asset_with_changes();
        assert!(asset.has_tag("pow"));
        assert!(!asset.has_tag("meme"));
    }
}
