// Instructions module exports
pub mod create_treasury;
pub mod buy_tweet;
pub mod burn_treasury;

pub use create_treasury::*;
pub use buy_tweet::*;
pub use burn_treasury::*;
