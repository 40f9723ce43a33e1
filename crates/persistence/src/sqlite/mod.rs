//! SQLite-backed key/value persistence

mod connection;
mod kv;
mod preferences;

pub use connection::Database;
pub use kv::{last_updated, load, remove, save};
pub use preferences::Repository;
