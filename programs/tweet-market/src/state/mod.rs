// programs/tweet-market/src/state/mod.rs
pub mod tweet;

pub use tweet::*;
