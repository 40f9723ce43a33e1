//! Wire models for the remote market-data feed
//!
//! The provider response is parsed permissively: numeric fields may arrive
//! as number, string, or null, and absent fields mean "no override" for
//! reconciliation — never zero.

use serde::{Deserialize, Serialize};

/// Snapshot returned by the feed client.
///
/// `success == false` means neither the network nor any cache could supply
/// data; callers degrade to the local catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedSnapshot {
    pub success: bool,
    pub result: Vec<FeedAsset>,
}

impl FeedSnapshot {
    pub fn failed() -> Self {
        Self {
            success: false,
            result: Vec::new(),
        }
    }
}

/// One live price record, normalized from the provider shape.
///
/// Every numeric field is optional: `None` tells the reconciler to keep
/// the local value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedAsset {
    /// Uppercased ticker symbol
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, rename = "change1h")]
    pub change_1h: Option<f64>,
    #[serde(default, rename = "change24h")]
    pub change_24h: Option<f64>,
    #[serde(default, rename = "change7d")]
    pub change_7d: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Raw provider record (CoinGecko `/coins/markets` shape).
///
/// Field names are the provider's snake_case; values are coerced leniently.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderCoin {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "deserialize_f64_opt_lenient")]
    pub current_price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_f64_opt_lenient")]
    pub market_cap: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_f64_opt_lenient")]
    pub total_volume: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_f64_opt_lenient")]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_f64_opt_lenient")]
    pub price_change_percentage_1h_in_currency: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_f64_opt_lenient")]
    pub price_change_percentage_7d_in_currency: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_f64_opt_lenient")]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub sparkline_in_7d: Option<ProviderSparkline>,
}

/// Sparkline wrapper in the provider response
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSparkline {
    #[serde(default)]
    pub price: Vec<f64>,
}

impl From<ProviderCoin> for FeedAsset {
    fn from(coin: ProviderCoin) -> Self {
        FeedAsset {
            symbol: coin.symbol.to_uppercase(),
            name: coin.name,
            price: coin.current_price.filter(|v| v.is_finite()),
            change_1h: coin.price_change_percentage_1h_in_currency.filter(|v| v.is_finite()),
            change_24h: coin.price_change_percentage_24h.filter(|v| v.is_finite()),
            change_7d: coin.price_change_percentage_7d_in_currency.filter(|v| v.is_finite()),
            volume: coin.total_volume.filter(|v| v.is_finite()),
            market_cap: coin.market_cap.filter(|v| v.is_finite()),
            circulating_supply: coin.circulating_supply.filter(|v| v.is_finite()),
            image: coin.image,
        }
    }
}

/// Deserialize an f64 that may arrive as a number, string, or null
fn deserialize_f64_opt_lenient<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de;

    struct F64OptLenient;

    impl<'de> de::Visitor<'de> for F64OptLenient {
        type Value = Option<f64>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a number, string, or null")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
            Ok(Some(v as f64))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
            Ok(Some(v as f64))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
            Ok(v.parse::<f64>().ok())
        }

        fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }
    }

    deserializer.deserialize_any(F64OptLenient)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_coin_lenient_parsing() {
        let json = r#"{
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "current_price": "3927500.5",
            "market_cap": 78409729395304,
            "total_volume": null,
            "price_change_percentage_24h": 2.35
        }"#;
        let coin: ProviderCoin = serde_json::from_str(json).unwrap();
        assert_eq!(coin.current_price, Some(3_927_500.5));
        assert_eq!(coin.total_volume, None);
        assert_eq!(coin.price_change_percentage_1h_in_currency, None);

        let feed = FeedAsset::from(coin);
        assert_eq!(feed.symbol, "BTC");
        assert_eq!(feed.change_24h, Some(2.35));
        assert_eq!(feed.volume, None);
    }

    #[test]
    fn test_unparseable_string_becomes_none() {
        let json = r#"{"id": "x", "symbol": "x", "name": "X", "current_price": "n/a"}"#;
        let coin: ProviderCoin = serde_json::from_str(json).unwrap();
        assert_eq!(coin.current_price, None);
    }

    #[test]
    fn test_failed_snapshot_is_empty() {
        let snapshot = FeedSnapshot::failed();
        assert!(!snapshot.success);
        assert!(snapshot.result.is_empty());
    }
}
