//! Community sentiment model

use crate::types::VoteType;
use serde::{Deserialize, Serialize};

/// Per-asset vote aggregate plus the current user's own vote.
///
/// `bullish_percent` and its bearish complement always sum to 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentData {
    pub bullish_percent: f64,
    pub total_votes: u32,
    #[serde(default)]
    pub user_vote: Option<VoteType>,
}

impl SentimentData {
    pub fn bearish_percent(&self) -> f64 {
        100.0 - self.bullish_percent
    }
}
