//! Kripto Networking - HTTP access to the market-data and index providers

pub mod http;

pub use http::FeedClient;
