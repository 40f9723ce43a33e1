//! Data models for the kripto market catalog and feed

mod asset;
mod feed;
mod holding;
mod indices;
mod sentiment;
mod stats;

pub use asset::*;
pub use feed::*;
pub use holding::*;
pub use indices::*;
pub use sentiment::*;
pub use stats::*;
