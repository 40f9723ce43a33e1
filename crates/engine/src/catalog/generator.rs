//! Synthetic long-tail generation
//!
//! Everything here is pure computation over an injected RNG: the same seed
//! always produces the same catalog.

use super::curated::curated_head;
use kripto_core::Asset;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of points in a generated sparkline
pub const SPARKLINE_POINTS: usize = 24;

const COIN_PREFIXES: [&str; 10] = [
    "Safe", "Ultra", "Mega", "Hyper", "Nova", "Cyber", "Deep", "Meta", "Quantum", "Stellar",
];
const COIN_SUFFIXES: [&str; 10] = [
    "Coin", "Token", "Protocol", "Chain", "Swap", "DAO", "Finance", "Network", "Verse", "AI",
];
const GENERATED_CATEGORIES: [&str; 8] = [
    "defi", "layer-1", "layer-2", "meme", "ai", "gaming", "storage", "nft",
];

/// Chart range for synthesized price history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartRange {
    H1,
    H24,
    D7,
    D30,
    M3,
}

impl ChartRange {
    fn points(&self) -> usize {
        match self {
            ChartRange::H1 => 60,
            ChartRange::H24 => 24,
            ChartRange::D7 => 7 * 24,
            ChartRange::D30 => 30,
            ChartRange::M3 => 90,
        }
    }

    fn volatility(&self) -> f64 {
        match self {
            ChartRange::H1 => 0.005,
            ChartRange::H24 => 0.02,
            ChartRange::D7 => 0.1,
            ChartRange::D30 => 0.2,
            ChartRange::M3 => 0.4,
        }
    }
}

/// Builds the reference catalog from a seeded random source
pub struct CatalogGenerator {
    rng: StdRng,
}

impl CatalogGenerator {
    /// Create a generator with a fixed seed (reproducible catalog)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Build the full catalog: curated head, then generated tail up to
    /// `total` entries. Identifiers are unique by construction
    /// (`name-rank` on the tail survives name collisions).
    pub fn generate(&mut self, total: usize) -> Vec<Asset> {
        let mut catalog = curated_head(&mut self.rng);
        catalog.truncate(total);

        let next_rank = catalog.len() as u32 + 1;
        for rank in next_rank..=total as u32 {
            let coin = self.generate_coin(rank);
            catalog.push(coin);
        }

        catalog
    }

    /// Generate one synthetic asset at the given rank
    fn generate_coin(&mut self, rank: u32) -> Asset {
        let prefix = COIN_PREFIXES[self.rng.gen_range(0..COIN_PREFIXES.len())];
        let suffix = COIN_SUFFIXES[self.rng.gen_range(0..COIN_SUFFIXES.len())];
        let name = format!("{}{}", prefix, suffix);
        let symbol = format!("{}{}", &prefix[..1], &suffix[..suffix.len().min(3)]).to_uppercase();

        // Price and market cap shrink with rank; both floored
        let base_price = (1000.0 / rank as f64 + self.rng.gen::<f64>() * 50.0).max(0.01);
        let market_cap = (10_000_000_000.0 - rank as f64 * 30_000_000.0).max(1_000_000.0);

        let main_category = GENERATED_CATEGORIES[self.rng.gen_range(0..GENERATED_CATEGORIES.len())];
        let mut categories = vec![main_category.to_string()];
        if self.rng.gen::<f64>() > 0.7 {
            categories.push("smart-contracts".to_string());
        }

        let mut asset = Asset {
            id: format!("{}-{}", name.to_lowercase(), rank),
            rank,
            name: name.clone(),
            symbol: symbol.clone(),
            image: format!(
                "https://ui-avatars.com/api/?name={}&background=random&color=fff&rounded=true&bold=true",
                symbol
            ),
            price: base_price,
            change_1h: (self.rng.gen::<f64>() - 0.5) * 5.0,
            change_24h: (self.rng.gen::<f64>() - 0.5) * 15.0,
            change_7d: (self.rng.gen::<f64>() - 0.5) * 30.0,
            change_30d: (self.rng.gen::<f64>() - 0.5) * 50.0,
            change_1y: (self.rng.gen::<f64>() - 0.5) * 100.0,
            market_cap,
            volume_24h: market_cap * (0.05 + self.rng.gen::<f64>() * 0.1),
            circulating_supply: market_cap / base_price,
            sparkline: self.generate_sparkline(base_price, 0.1),
            categories,
            description: Some(format!("This is a generated description for {}.", name)),
            socials: None,
            tvl: None,
            apy: None,
            max_supply: None,
            hashrate: None,
            dominance: None,
            sentiment_score: None,
            whale_activity: None,
            developer_activity: None,
        };

        self.fill_archetype_fields(&mut asset);
        asset
    }

    /// Populate archetype data matching the asset's category tags
    fn fill_archetype_fields(&mut self, asset: &mut Asset) {
        if asset.has_tag("defi") {
            asset.tvl = Some(asset.market_cap * (0.1 + self.rng.gen::<f64>() * 0.4));
            asset.apy = Some(2.0 + self.rng.gen::<f64>() * 20.0);
        }

        if asset.has_tag("meme") {
            asset.sentiment_score = Some(40 + self.rng.gen_range(0..60));
            asset.whale_activity = Some(50 + self.rng.gen_range(0..5000));
        }

        if asset.has_tag("layer-1") || asset.has_tag("pow") {
            asset.hashrate = Some(format!("{} EH/s", self.rng.gen_range(0..500)));
            asset.developer_activity = Some(100 + self.rng.gen_range(0..2000));
        }
    }

    /// Bounded random walk around the base price, floored at 80% of it
    pub fn generate_sparkline(&mut self, base_price: f64, volatility: f64) -> Vec<f64> {
        generate_sparkline(&mut self.rng, base_price, volatility)
    }

    /// Synthesize a price history for a chart range; the last point is
    /// pinned to the current price
    pub fn generate_history(&mut self, base_price: f64, range: ChartRange) -> Vec<f64> {
        let points = range.points();
        let volatility = range.volatility();

        let mut data = Vec::with_capacity(points);
        let mut current = base_price * (1.0 - volatility / 2.0);

        for _ in 0..points {
            let change =
                (self.rng.gen::<f64>() - 0.5) * 2.0 * volatility * (base_price / points as f64);
            current = (current + change).max(0.000001);
            data.push(current);
        }

        if let Some(last) = data.last_mut() {
            *last = base_price;
        }

        data
    }
}

/// Shared sparkline walk, also used for the curated head
pub(super) fn generate_sparkline<R: Rng>(rng: &mut R, base_price: f64, volatility: f64) -> Vec<f64> {
    let mut data = Vec::with_capacity(SPARKLINE_POINTS);
    let mut price = base_price * (1.0 - volatility);

    for _ in 0..SPARKLINE_POINTS {
        let change = (rng.gen::<f64>() - 0.5) * 2.0 * volatility * base_price;
        price = (price + change).max(base_price * 0.8);
        data.push(price);
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DEFAULT_CATALOG_SIZE;
    use std::collections::HashSet;

    #[test]
    fn test_same_seed_same_catalog() {
        let a = CatalogGenerator::new(42).generate(50);
        let b = CatalogGenerator::new(42).generate(50);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.price, y.price);
            assert_eq!(x.sparkline, y.sparkline);
        }
    }

    #[test]
    fn test_identifiers_are_unique() {
        let catalog = CatalogGenerator::new(7).generate(DEFAULT_CATALOG_SIZE);
        let ids: HashSet<_> = catalog.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_ranks_are_dense_from_one() {
        let catalog = CatalogGenerator::new(7).generate(100);
        for (i, asset) in catalog.iter().enumerate() {
            assert_eq!(asset.rank as usize, i + 1);
        }
    }

    #[test]
    fn test_numeric_fields_are_sane() {
        let catalog = CatalogGenerator::new(3).generate(DEFAULT_CATALOG_SIZE);
        for asset in &catalog {
            assert!(asset.price.is_finite() && asset.price > 0.0, "{}", asset.id);
            assert!(asset.market_cap >= 1_000_000.0);
            assert!(asset.volume_24h >= 0.0);
            assert!(asset.circulating_supply >= 0.0);
            assert!(asset.sparkline.len() >= SPARKLINE_POINTS);
            assert!(!asset.categories.is_empty());
        }
    }

    #[test]
    fn test_archetype_fields_follow_categories() {
        let catalog = CatalogGenerator::new(11).generate(DEFAULT_CATALOG_SIZE);
        for asset in catalog.iter().filter(|a| a.has_tag("defi")) {
            assert!(asset.tvl.is_some(), "{} missing tvl", asset.id);
            assert!(asset.apy.is_some(), "{} missing apy", asset.id);
        }
        for asset in catalog.iter().filter(|a| a.has_tag("meme")) {
            assert!(asset.sentiment_score.is_some());
            assert!(asset.whale_activity.is_some());
        }
    }

    #[test]
    fn test_history_last_point_is_base_price() {
        let mut generator = CatalogGenerator::new(1);
        let history = generator.generate_history(100.0, ChartRange::D7);
        assert_eq!(history.len(), 7 * 24);
        assert_eq!(*history.last().unwrap(), 100.0);
        assert!(history.iter().all(|p| *p > 0.0));
    }
}
