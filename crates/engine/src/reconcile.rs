//! Feed reconciliation
//!
//! Merges a remote price snapshot into the local catalog. The remote feed
//! is shallow (price-only); the catalog carries the richer metadata, so
//! the merge only ever overwrites live numeric fields and must tolerate
//! partial, low-quality, or absent remote data without corrupting the
//! local shape.

use kripto_core::{Asset, FeedAsset, FeedSnapshot};

/// Merge a snapshot into the catalog.
///
/// The result has exactly the same entries as `catalog`: same size, same
/// identifiers, same order. Records are matched by case-insensitive
/// symbol, then by case-insensitive name; unmatched assets pass through
/// unchanged. Reconciling twice with the same snapshot is a no-op.
pub fn reconcile(catalog: &[Asset], snapshot: &FeedSnapshot) -> Vec<Asset> {
    if !snapshot.success || snapshot.result.is_empty() {
        return catalog.to_vec();
    }

    catalog
        .iter()
        .map(|asset| match find_match(&snapshot.result, asset) {
            Some(remote) => merge(asset, remote),
            None => asset.clone(),
        })
        .collect()
}

fn find_match<'a>(records: &'a [FeedAsset], asset: &Asset) -> Option<&'a FeedAsset> {
    let symbol = asset.symbol.to_lowercase();
    records
        .iter()
        .find(|r| r.symbol.to_lowercase() == symbol)
        .or_else(|| {
            let name = asset.name.to_lowercase();
            records.iter().find(|r| r.name.to_lowercase() == name)
        })
}

/// Overwrite live numeric fields from the remote record, keeping the
/// local value wherever the remote one is absent or non-finite
fn merge(local: &Asset, remote: &FeedAsset) -> Asset {
    let mut merged = local.clone();

    merged.price = coalesce(remote.price, local.price);
    merged.change_1h = coalesce(remote.change_1h, local.change_1h);
    merged.change_24h = coalesce(remote.change_24h, local.change_24h);
    merged.change_7d = coalesce(remote.change_7d, local.change_7d);
    merged.market_cap = coalesce(remote.market_cap, local.market_cap);
    merged.volume_24h = coalesce(remote.volume, local.volume_24h);
    merged.circulating_supply = coalesce(remote.circulating_supply, local.circulating_supply);

    if let Some(image) = &remote.image {
        merged.image = image.clone();
    }

    merged
}

fn coalesce(remote: Option<f64>, local: f64) -> f64 {
    match remote {
        Some(v) if v.is_finite() => v,
        _ => local,
    }
}
