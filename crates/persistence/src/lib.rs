//! Kripto Persistence - Durable preference store and snapshot cache

pub mod cache;
pub mod sqlite;

pub use cache::SnapshotCache;
pub use sqlite::Database;
pub use sqlite::Repository;
