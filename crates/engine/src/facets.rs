//! Facet filtering and sorting of the catalog view
//!
//! Category and zone filter over the same tag vocabulary; they are two
//! sentinel-filtered views of one tag set, not separate taxonomies.

use kripto_core::{Asset, SortDirection, SortField, Timeframe};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sentinel id that disables a category or zone filter
pub const ALL: &str = "all";

/// Category tab shown above the market table
pub struct CategoryTab {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

pub const CATEGORIES: [CategoryTab; 9] = [
    CategoryTab { id: "all", name: "Tümü", icon: "🌐" },
    CategoryTab { id: "defi", name: "DeFi", icon: "💰" },
    CategoryTab { id: "layer-1", name: "Layer 1", icon: "⛓️" },
    CategoryTab { id: "layer-2", name: "Layer 2", icon: "🔗" },
    CategoryTab { id: "meme", name: "Meme", icon: "🐸" },
    CategoryTab { id: "ai", name: "AI", icon: "🤖" },
    CategoryTab { id: "gaming", name: "Gaming", icon: "🎮" },
    CategoryTab { id: "nft", name: "NFT", icon: "🖼️" },
    CategoryTab { id: "stablecoin", name: "Stablecoin", icon: "💵" },
];

/// Blockchain-ecosystem zone filter
pub struct ZoneTab {
    pub id: &'static str,
    pub name: &'static str,
}

pub const ZONES: [ZoneTab; 9] = [
    ZoneTab { id: "all", name: "Tümü" },
    ZoneTab { id: "ethereum-ecosystem", name: "Ethereum" },
    ZoneTab { id: "bnb-chain", name: "BNB Chain" },
    ZoneTab { id: "solana-ecosystem", name: "Solana" },
    ZoneTab { id: "polygon", name: "Polygon" },
    ZoneTab { id: "arbitrum", name: "Arbitrum" },
    ZoneTab { id: "optimism", name: "Optimism" },
    ZoneTab { id: "avalanche", name: "Avalanche" },
    ZoneTab { id: "base", name: "Base" },
];

/// User-controlled view state for the market table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetSelection {
    pub search: String,
    pub category: String,
    pub zone: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    /// Timeframe the Change column sorts on
    pub timeframe: Timeframe,
}

impl Default for FacetSelection {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL.to_string(),
            zone: ALL.to_string(),
            sort_field: SortField::Rank,
            sort_direction: SortDirection::Ascending,
            timeframe: Timeframe::default(),
        }
    }
}

impl FacetSelection {
    /// Select a sort field: a repeat click toggles direction, a new field
    /// starts at that field's default direction
    pub fn select_sort_field(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = field;
            self.sort_direction = field.default_direction();
        }
    }
}

/// Apply the selection's filters and sort, returning a new ordered view.
/// The input catalog is never mutated.
pub fn apply(catalog: &[Asset], selection: &FacetSelection) -> Vec<Asset> {
    let query = selection.search.to_lowercase();

    let mut view: Vec<Asset> = catalog
        .iter()
        .filter(|asset| {
            if !query.is_empty()
                && !asset.name.to_lowercase().contains(&query)
                && !asset.symbol.to_lowercase().contains(&query)
            {
                return false;
            }

            if selection.category != ALL && !asset.has_tag(&selection.category) {
                return false;
            }

            if selection.zone != ALL && !asset.has_tag(&selection.zone) {
                return false;
            }

            true
        })
        .cloned()
        .collect();

    sort_view(&mut view, selection);
    view
}

fn sort_view(view: &mut [Asset], selection: &FacetSelection) {
    let timeframe = selection.timeframe;
    let direction = selection.sort_direction;

    // The direction lives in the comparator: a stable sort plus a reverse
    // would flip the catalog order of equal keys
    match selection.sort_field {
        SortField::Rank => view.sort_by(|a, b| directed(direction, a.rank.cmp(&b.rank))),
        SortField::Name => view.sort_by(|a, b| {
            directed(direction, a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }),
        SortField::Price => sort_by_f64(view, direction, |a| a.price),
        SortField::Change => sort_by_f64(view, direction, |a| a.change_for(timeframe)),
        SortField::MarketCap => sort_by_f64(view, direction, |a| a.market_cap),
        SortField::Volume => sort_by_f64(view, direction, |a| a.volume_24h),
    }
}

fn directed(direction: SortDirection, ordering: Ordering) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

fn sort_by_f64<F>(view: &mut [Asset], direction: SortDirection, key: F)
where
    F: Fn(&Asset) -> f64,
{
    view.sort_by(|a, b| {
        directed(
            direction,
            key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal),
        )
    });
}
