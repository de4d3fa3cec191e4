//! Time-bounded purchase offers, funded up front and held in escrow.

pub mod types;

mod token;

pub use types::*;

use near_sdk::AccountId;

pub(crate) fn offer_key(item_key: &str, buyer_id: &AccountId) -> String {
    format!("{}\0{}", item_key, buyer_id)
}
