//! Derived aggregates over the merged catalog
//!
//! All functions are pure, read-only consumers of the catalog. Sorts are
//! stable so equal keys preserve catalog order, which keeps the ranked
//! subsets deterministic.

use kripto_core::{AltcoinSeasonData, Asset, GlobalStats};
use std::cmp::Ordering;

/// Entries per ranked subset (gainers, losers, volume, trending, new)
pub const TOP_LIST_SIZE: usize = 4;

/// Minimum 24h change for an asset to count as trending
pub const TRENDING_THRESHOLD: f64 = 5.0;

/// Market count reported by the provider, supplied rather than derived
pub const MARKETS_COUNT: u32 = 1_124;

/// Observed default for the externally supplied 24h market-cap delta
pub const DEFAULT_MARKET_CAP_CHANGE_24H: f64 = 0.35;

/// Compute the global stats snapshot.
///
/// `market_cap_change_24h` is passed through: deriving it would require a
/// historical snapshot this system does not keep.
pub fn compute_global_stats(catalog: &[Asset], market_cap_change_24h: f64) -> GlobalStats {
    let total_market_cap: f64 = catalog.iter().map(|a| a.market_cap).sum();
    let total_volume_24h: f64 = catalog.iter().map(|a| a.volume_24h).sum();

    let dominance = |index: usize| -> f64 {
        if total_market_cap <= 0.0 {
            return 0.0;
        }
        catalog
            .get(index)
            .map(|a| a.market_cap / total_market_cap * 100.0)
            .unwrap_or(0.0)
    };

    GlobalStats {
        total_market_cap,
        total_volume_24h,
        btc_dominance: dominance(0),
        eth_dominance: dominance(1),
        active_cryptos: catalog.len() as u32,
        markets: MARKETS_COUNT,
        market_cap_change_24h,
    }
}

fn sorted_desc_by<F>(catalog: &[Asset], key: F) -> Vec<Asset>
where
    F: Fn(&Asset) -> f64,
{
    let mut sorted: Vec<Asset> = catalog.to_vec();
    sorted.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
    sorted
}

/// Top N assets by 24h change, best first
pub fn top_gainers(catalog: &[Asset], n: usize) -> Vec<Asset> {
    let mut list = sorted_desc_by(catalog, |a| a.change_24h);
    list.truncate(n);
    list
}

/// Top N assets by 24h change, worst first
pub fn top_losers(catalog: &[Asset], n: usize) -> Vec<Asset> {
    let mut sorted: Vec<Asset> = catalog.to_vec();
    sorted.sort_by(|a, b| {
        a.change_24h
            .partial_cmp(&b.change_24h)
            .unwrap_or(Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

/// Top N assets by 24h volume
pub fn top_volume(catalog: &[Asset], n: usize) -> Vec<Asset> {
    let mut list = sorted_desc_by(catalog, |a| a.volume_24h);
    list.truncate(n);
    list
}

/// Assets moving more than the trending threshold over 24h, best first.
/// Returns fewer than N when fewer qualify; never pads.
pub fn trending(catalog: &[Asset], n: usize) -> Vec<Asset> {
    let movers: Vec<Asset> = catalog
        .iter()
        .filter(|a| a.change_24h > TRENDING_THRESHOLD)
        .cloned()
        .collect();
    let mut list = sorted_desc_by(&movers, |a| a.change_24h);
    list.truncate(n);
    list
}

/// Last N catalog entries in insertion order, newest first
pub fn new_listings(catalog: &[Asset], n: usize) -> Vec<Asset> {
    catalog.iter().rev().take(n).cloned().collect()
}

/// Altcoin season score: the share of altcoins beating Bitcoin over 30d
pub fn altcoin_season(catalog: &[Asset]) -> AltcoinSeasonData {
    let btc_change = catalog
        .iter()
        .find(|a| a.id == "bitcoin")
        .map(|a| a.change_30d)
        .unwrap_or(0.0);

    let altcoins: Vec<&Asset> = catalog.iter().filter(|a| a.id != "bitcoin").collect();
    let outperforming = altcoins
        .iter()
        .filter(|a| a.change_30d > btc_change)
        .count();

    let score = if altcoins.is_empty() {
        50
    } else {
        (outperforming as f64 / altcoins.len() as f64 * 100.0).round() as u32
    };

    let (classification, classification_turkish) = season_classification(score);

    AltcoinSeasonData {
        score,
        classification: classification.to_string(),
        classification_turkish: classification_turkish.to_string(),
        altcoins_outperforming: outperforming as u32,
        total_altcoins: altcoins.len() as u32,
    }
}

fn season_classification(score: u32) -> (&'static str, &'static str) {
    match score {
        0..=25 => ("Bitcoin Season", "Bitcoin Sezonu"),
        26..=75 => ("Neutral", "Nötr"),
        _ => ("Altcoin Season", "Altcoin Sezonu"),
    }
}
