//! HTTP client layer

mod client;

pub use client::FeedClient;
