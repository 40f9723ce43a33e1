//! Market index models: fear/greed and altcoin season

use serde::{Deserialize, Serialize};

/// Fear & Greed index value with classification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FearGreedData {
    /// Index value in [0, 100]
    pub value: u32,
    /// Provider classification ("Fear", "Greed", ...)
    pub value_classification: String,
    pub value_turkish: String,
    pub timestamp: i64,
    pub time_until_update: i64,
}

impl FearGreedData {
    /// Turkish classification for an index value
    pub fn turkish_classification(value: u32) -> &'static str {
        match value {
            0..=24 => "Aşırı Korku",
            25..=49 => "Korku",
            50 => "Nötr",
            51..=74 => "Açgözlülük",
            _ => "Aşırı Açgözlülük",
        }
    }
}

/// Raw fear/greed provider response: `{"data": [{"value": "27", ...}]}`
/// with numbers delivered as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct FearGreedResponse {
    pub data: Vec<FearGreedEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FearGreedEntry {
    pub value: String,
    pub value_classification: String,
    pub timestamp: String,
    #[serde(default)]
    pub time_until_update: Option<String>,
}

/// Altcoin season score derived from 30d performance vs Bitcoin
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AltcoinSeasonData {
    /// Share of altcoins outperforming Bitcoin, in [0, 100]
    pub score: u32,
    pub classification: String,
    pub classification_turkish: String,
    pub altcoins_outperforming: u32,
    pub total_altcoins: u32,
}
