//! Community sentiment: deterministic baseline plus the user's own vote
//!
//! The aggregate baseline is a pure function of the asset id, so every
//! session sees the same stable numbers without persisting them. Only the
//! user's votes are stored.

use kripto_core::{SentimentData, VoteType};
use kripto_persistence::Repository;
use std::collections::HashMap;

/// Per-session sentiment state
pub struct SentimentTracker {
    repo: Repository,
    votes: HashMap<String, VoteType>,
}

impl SentimentTracker {
    /// Load the user's persisted votes
    pub async fn load(repo: Repository) -> Self {
        let votes = repo.load_votes().await;
        Self { repo, votes }
    }

    /// Current sentiment for an asset, with the baseline nudged slightly
    /// toward the user's own vote
    pub fn sentiment_for(&self, asset_id: &str) -> SentimentData {
        let (base_bullish, base_votes) = baseline(asset_id);
        let user_vote = self.votes.get(asset_id).copied();

        let bullish = match user_vote {
            Some(VoteType::Bullish) => (base_bullish + 0.5).min(99.0),
            Some(VoteType::Bearish) => (base_bullish - 0.5).max(1.0),
            None => base_bullish,
        };

        SentimentData {
            bullish_percent: (bullish * 10.0).round() / 10.0,
            total_votes: base_votes + if user_vote.is_some() { 1 } else { 0 },
            user_vote,
        }
    }

    /// Cast a vote. Voting the same way twice toggles the vote off.
    pub async fn vote(&mut self, asset_id: &str, vote: VoteType) {
        if self.votes.get(asset_id) == Some(&vote) {
            self.votes.remove(asset_id);
        } else {
            self.votes.insert(asset_id.to_string(), vote);
        }
        self.repo.save_votes(&self.votes).await;
    }

    pub fn has_voted(&self, asset_id: &str) -> bool {
        self.votes.contains_key(asset_id)
    }
}

/// Stable pseudo-random baseline derived from the asset id.
///
/// Uses a 31-hash with i32 wrapping so the same id always yields the same
/// aggregate: bullish in [55, 85), votes in [1000, 10000).
fn baseline(asset_id: &str) -> (f64, u32) {
    let mut hash: i32 = 0;
    for ch in asset_id.chars() {
        hash = (ch as u32 as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }

    let bullish = 55.0 + (hash % 30).abs() as f64;
    let votes = 1000 + ((hash as i64 * 7) % 9000).abs() as u32;

    (bullish, votes)
}
