//! NEP-297-style JSON events, one emit helper per state change.

mod builder;
mod market;

pub(crate) use market::*;

pub(crate) const STANDARD: &str = "nft_marketplace";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

/// Event type for marketplace state changes.
pub(crate) const MARKET: &str = "market_update";
