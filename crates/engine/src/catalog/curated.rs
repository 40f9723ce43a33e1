//! Hand-authored catalog head: major assets with full archetype metadata
//!
//! Prices are TRY. Sparklines are synthesized from the caller's RNG so the
//! whole catalog stays reproducible under one seed.

use super::generator::generate_sparkline;
use kripto_core::{Asset, Socials};
use rand::Rng;

/// Zero/empty template; curated entries override what they need
fn blank() -> Asset {
    Asset {
        id: String::new(),
        rank: 0,
        name: String::new(),
        symbol: String::new(),
        image: String::new(),
        price: 0.0,
        change_1h: 0.0,
        change_24h: 0.0,
        change_7d: 0.0,
        change_30d: 0.0,
        change_1y: 0.0,
        market_cap: 0.0,
        volume_24h: 0.0,
        circulating_supply: 0.0,
        sparkline: Vec::new(),
        categories: Vec::new(),
        description: None,
        socials: None,
        tvl: None,
        apy: None,
        max_supply: None,
        hashrate: None,
        dominance: None,
        sentiment_score: None,
        whale_activity: None,
        developer_activity: None,
    }
}

fn tags(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

/// The curated head of the catalog, in rank order
pub fn curated_head<R: Rng>(rng: &mut R) -> Vec<Asset> {
    vec![
        Asset {
            id: "bitcoin".into(),
            rank: 1,
            name: "Bitcoin".into(),
            symbol: "BTC".into(),
            image: "https://assets.coingecko.com/coins/images/1/small/bitcoin.png".into(),
            price: 3_927_500.0,
            change_1h: 0.12,
            change_24h: 2.35,
            change_7d: -1.24,
            change_30d: 15.67,
            change_1y: 142.35,
            market_cap: 78_409_729_395_304.0,
            volume_24h: 1_785_702_219_354.0,
            circulating_supply: 19_850_000.0,
            sparkline: generate_sparkline(rng, 3_927_500.0, 0.05),
            categories: tags(&["layer-1", "pow"]),
            description: Some(
                "Bitcoin (BTC), Satoshi Nakamoto tarafından oluşturulan ve merkeziyetsiz \
                 bir yapıya sahip olan ilk kripto para birimidir. Dijital altın olarak da \
                 bilinir."
                    .into(),
            ),
            socials: Some(Socials {
                website: Some("https://bitcoin.org".into()),
                twitter: Some("https://twitter.com/bitcoin".into()),
            }),
            max_supply: Some(21_000_000.0),
            hashrate: Some("650 EH/s".into()),
            dominance: Some(58.4),
            ..blank()
        },
        Asset {
            id: "ethereum".into(),
            rank: 2,
            name: "Ethereum".into(),
            symbol: "ETH".into(),
            image: "https://cryptologos.cc/logos/ethereum-eth-logo.png".into(),
            price: 134_515.0,
            change_1h: -0.08,
            change_24h: 1.87,
            change_7d: 4.52,
            change_30d: 22.45,
            change_1y: 89.12,
            market_cap: 16_222_399_500_149.0,
            volume_24h: 965_440_690_281.0,
            circulating_supply: 120_450_000.0,
            sparkline: generate_sparkline(rng, 134_515.0, 0.05),
            categories: tags(&["layer-1", "smart-contracts", "defi"]),
            socials: Some(Socials {
                website: Some("https://ethereum.org".into()),
                twitter: Some("https://twitter.com/ethereum".into()),
            }),
            tvl: Some(65_000_000_000.0),
            apy: Some(3.4),
            developer_activity: Some(9_850),
            ..blank()
        },
        Asset {
            id: "tether".into(),
            rank: 3,
            name: "Tether".into(),
            symbol: "USDT".into(),
            image: "https://assets.coingecko.com/coins/images/325/small/Tether.png".into(),
            price: 35.52,
            change_1h: 0.01,
            change_24h: 0.02,
            change_7d: 0.01,
            change_30d: 0.03,
            change_1y: 0.05,
            market_cap: 8_062_267_071_538.0,
            volume_24h: 3_867_338_436_573.0,
            circulating_supply: 143_000_000_000.0,
            sparkline: generate_sparkline(rng, 35.52, 0.001),
            categories: tags(&["stablecoin"]),
            tvl: Some(143_000_000_000.0),
            ..blank()
        },
        Asset {
            id: "xrp".into(),
            rank: 4,
            name: "XRP".into(),
            symbol: "XRP".into(),
            image: "https://assets.coingecko.com/coins/images/44/small/xrp-symbol-white-128.png"
                .into(),
            price: 96.87,
            change_1h: 0.45,
            change_24h: 5.23,
            change_7d: 12.45,
            change_30d: 45.23,
            change_1y: 312.45,
            market_cap: 5_579_407_553_121.0,
            volume_24h: 187_594_753_485.0,
            circulating_supply: 57_600_000_000.0,
            sparkline: generate_sparkline(rng, 96.87, 0.08),
            categories: tags(&["layer-1", "payments"]),
            max_supply: Some(100_000_000_000.0),
            ..blank()
        },
        Asset {
            id: "bnb".into(),
            rank: 5,
            name: "BNB".into(),
            symbol: "BNB".into(),
            image: "https://assets.coingecko.com/coins/images/825/small/bnb-icon2_2x.png".into(),
            price: 36_725.0,
            change_1h: -0.22,
            change_24h: 0.89,
            change_7d: 2.15,
            change_30d: 8.45,
            change_1y: 156.78,
            market_cap: 5_329_340_859_336.0,
            volume_24h: 90_171_855_150.0,
            circulating_supply: 145_000_000.0,
            sparkline: generate_sparkline(rng, 36_725.0, 0.05),
            categories: tags(&["layer-1", "exchange-token", "bnb-chain"]),
            tvl: Some(4_500_000_000.0),
            ..blank()
        },
        Asset {
            id: "solana".into(),
            rank: 6,
            name: "Solana".into(),
            symbol: "SOL".into(),
            image: "https://assets.coingecko.com/coins/images/4128/small/solana.png".into(),
            price: 7_207.0,
            change_1h: 0.67,
            change_24h: 3.45,
            change_7d: -2.87,
            change_30d: 18.92,
            change_1y: 245.67,
            market_cap: 3_402_472_203_318.0,
            volume_24h: 212_121_457_103.0,
            circulating_supply: 472_000_000.0,
            sparkline: generate_sparkline(rng, 7_207.0, 0.07),
            categories: tags(&["layer-1", "smart-contracts", "solana-ecosystem"]),
            tvl: Some(8_200_000_000.0),
            developer_activity: Some(4_500),
            sentiment_score: Some(88),
            ..blank()
        },
        Asset {
            id: "usdc".into(),
            rank: 7,
            name: "USD Coin".into(),
            symbol: "USDC".into(),
            image: "https://assets.coingecko.com/coins/images/6319/small/usdc.png".into(),
            price: 35.51,
            change_1h: 0.00,
            change_24h: 0.01,
            change_7d: 0.02,
            change_30d: 0.04,
            change_1y: 0.08,
            market_cap: 3_232_883_760_315.0,
            volume_24h: 550_465_688_345.0,
            circulating_supply: 91_000_000_000.0,
            sparkline: generate_sparkline(rng, 35.51, 0.001),
            categories: tags(&["stablecoin"]),
            ..blank()
        },
        Asset {
            id: "dogecoin".into(),
            rank: 8,
            name: "Dogecoin".into(),
            symbol: "DOGE".into(),
            image: "https://assets.coingecko.com/coins/images/5/small/dogecoin.png".into(),
            price: 12.78,
            change_1h: 1.23,
            change_24h: 8.45,
            change_7d: 15.67,
            change_30d: 42.34,
            change_1y: 178.92,
            market_cap: 1_035_162_804_667.0,
            volume_24h: 68_634_662_032.0,
            circulating_supply: 147_000_000_000.0,
            sparkline: generate_sparkline(rng, 12.78, 0.12),
            categories: tags(&["meme", "pow"]),
            sentiment_score: Some(94),
            whale_activity: Some(1_250),
            ..blank()
        },
        Asset {
            id: "cardano".into(),
            rank: 9,
            name: "Cardano".into(),
            symbol: "ADA".into(),
            image: "https://assets.coingecko.com/coins/images/975/small/cardano.png".into(),
            price: 38.24,
            change_1h: 0.34,
            change_24h: 2.15,
            change_7d: 6.78,
            change_30d: 28.45,
            change_1y: 65.23,
            market_cap: 613_977_402_577.0,
            volume_24h: 26_297_972_301.0,
            circulating_supply: 35_500_000_000.0,
            sparkline: generate_sparkline(rng, 38.24, 0.06),
            categories: tags(&["layer-1", "smart-contracts", "pos"]),
            developer_activity: Some(12_000),
            max_supply: Some(45_000_000_000.0),
            ..blank()
        },
        Asset {
            id: "tron".into(),
            rank: 10,
            name: "TRON".into(),
            symbol: "TRX".into(),
            image: "https://assets.coingecko.com/coins/images/1094/small/tron-logo.png".into(),
            price: 9.23,
            change_1h: 0.15,
            change_24h: 1.23,
            change_7d: 3.45,
            change_30d: 12.67,
            change_1y: 98.45,
            market_cap: 1_200_122_971_282.0,
            volume_24h: 23_875_944_020.0,
            circulating_supply: 86_200_000_000.0,
            sparkline: generate_sparkline(rng, 9.23, 0.05),
            categories: tags(&["layer-1", "smart-contracts"]),
            tvl: Some(8_500_000_000.0),
            ..blank()
        },
        Asset {
            id: "chainlink".into(),
            rank: 11,
            name: "Chainlink".into(),
            symbol: "LINK".into(),
            image: "https://assets.coingecko.com/coins/images/877/small/chainlink-new-logo.png"
                .into(),
            price: 894.25,
            change_1h: -0.45,
            change_24h: 4.56,
            change_7d: 8.92,
            change_30d: 32.15,
            change_1y: 189.34,
            market_cap: 404_452_177_452.0,
            volume_24h: 28_689_818_811.0,
            circulating_supply: 626_000_000.0,
            sparkline: generate_sparkline(rng, 894.25, 0.07),
            categories: tags(&["oracle", "defi"]),
            developer_activity: Some(750),
            tvl: Some(0.0),
            ..blank()
        },
        Asset {
            id: "shiba-inu".into(),
            rank: 12,
            name: "Shiba Inu".into(),
            symbol: "SHIB".into(),
            image: "https://assets.coingecko.com/coins/images/11939/small/shiba.png".into(),
            price: 0.000887,
            change_1h: 2.34,
            change_24h: 12.45,
            change_7d: 25.67,
            change_30d: 85.23,
            change_1y: 456.78,
            market_cap: 145_678_901_234.0,
            volume_24h: 8_765_432_109.0,
            circulating_supply: 589_000_000_000_000.0,
            sparkline: generate_sparkline(rng, 0.000887, 0.15),
            categories: tags(&["meme", "ethereum-ecosystem"]),
            sentiment_score: Some(91),
            whale_activity: Some(850),
            ..blank()
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_head_is_rank_ordered_and_unique() {
        let mut rng = StdRng::seed_from_u64(0);
        let head = curated_head(&mut rng);
        assert_eq!(head[0].id, "bitcoin");
        for (i, asset) in head.iter().enumerate() {
            assert_eq!(asset.rank as usize, i + 1);
            assert!(!asset.categories.is_empty());
            assert!(!asset.sparkline.is_empty());
        }
    }

    #[test]
    fn test_archetypes_are_populated() {
        let mut rng = StdRng::seed_from_u64(0);
        let head = curated_head(&mut rng);
        let btc = &head[0];
        assert_eq!(btc.max_supply, Some(21_000_000.0));
        assert!(btc.hashrate.is_some());
        let doge = head.iter().find(|a| a.id == "dogecoin").unwrap();
        assert!(doge.sentiment_score.is_some());
        assert!(doge.whale_activity.is_some());
    }
}
