//! Generic JSON key/value operations
//!
//! Loads never fail: a missing key, unreadable storage, or a payload that
//! does not deserialize all resolve to `None` so callers fall back to
//! their documented default. Saves are last-writer-wins and swallow
//! storage errors after logging them.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::{debug, warn};

/// Load and deserialize the JSON value stored under `key`
pub async fn load<T: DeserializeOwned>(pool: &SqlitePool, key: &str) -> Option<T> {
    let row: Option<(String,)> = match sqlx::query_as("SELECT value FROM kv WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await
    {
        Ok(row) => row,
        Err(e) => {
            warn!("Storage read failed for {}: {}", key, e);
            return None;
        }
    };

    let (raw,) = row?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            // Corrupted payload counts as absent, not as an error
            debug!("Discarding malformed value for {}: {}", key, e);
            None
        }
    }
}

/// Serialize `value` as JSON and store it under `key`
pub async fn save<T: Serialize>(pool: &SqlitePool, key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Serialization failed for {}: {}", key, e);
            return;
        }
    };

    if let Err(e) = sqlx::query(
        r#"
        INSERT INTO kv (key, value, updated_at)
        VALUES (?, ?, CURRENT_TIMESTAMP)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP
        "#,
    )
    .bind(key)
    .bind(&raw)
    .execute(pool)
    .await
    {
        warn!("Storage write failed for {}: {}", key, e);
    }
}

/// When the value under `key` was last written
pub async fn last_updated(pool: &SqlitePool, key: &str) -> Option<DateTime<Utc>> {
    let row: Option<(DateTime<Utc>,)> = sqlx::query_as("SELECT updated_at FROM kv WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await
        .ok()?;
    row.map(|(ts,)| ts)
}

/// Remove the value stored under `key`
pub async fn remove(pool: &SqlitePool, key: &str) {
    if let Err(e) = sqlx::query("DELETE FROM kv WHERE key = ?")
        .bind(key)
        .execute(pool)
        .await
    {
        warn!("Storage delete failed for {}: {}", key, e);
    }
}
