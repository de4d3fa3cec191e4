//! English auctions: escrow-backed bidding with seller settlement.

pub mod types;

mod engine;

pub use types::*;
