//! Auction domain types.

use near_sdk::json_types::U128;
use near_sdk::near;
use near_sdk::AccountId;

/// One open auction. Record presence means the auction is open; settlement
/// and cancellation both remove it. The highest bid's funds sit in escrow
/// under the leading bidder.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Auction {
    pub seller: AccountId,
    /// Advisory floor shown to bidders; not enforced on settlement.
    pub reserve_price: u128,
    /// Nanosecond timestamp; bidding closes at this instant.
    pub end_time: u64,
    pub highest_bidder: Option<AccountId>,
    pub highest_bid: u128,
    pub created_at: u64,
}

/// JSON projection of an auction for view calls.
#[near(serializers = [json])]
pub struct AuctionView {
    pub seller: AccountId,
    pub reserve_price: U128,
    pub end_time: u64,
    pub highest_bidder: Option<AccountId>,
    pub highest_bid: U128,
    pub created_at: u64,
}

impl From<&Auction> for AuctionView {
    fn from(auction: &Auction) -> Self {
        Self {
            seller: auction.seller.clone(),
            reserve_price: U128(auction.reserve_price),
            end_time: auction.end_time,
            highest_bidder: auction.highest_bidder.clone(),
            highest_bid: U128(auction.highest_bid),
            created_at: auction.created_at,
        }
    }
}
