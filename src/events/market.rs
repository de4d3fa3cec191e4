use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::MARKET;
use crate::sale::PayKind;

pub fn emit_listed(
    seller: &AccountId,
    item_key: &str,
    price: u128,
    pay_kind: PayKind,
) {
    EventBuilder::new(MARKET, "list", seller)
        .field("seller_id", seller)
        .field("item", item_key)
        .field("price", price)
        .field("pay_kind", pay_kind.as_str())
        .emit();
}

pub fn emit_listing_cancelled(seller: &AccountId, item_key: &str) {
    EventBuilder::new(MARKET, "cancel_listing", seller)
        .field("seller_id", seller)
        .field("item", item_key)
        .emit();
}

pub fn emit_purchase(
    buyer: &AccountId,
    seller: &AccountId,
    item_key: &str,
    price: u128,
    fee: u128,
    pay_kind: PayKind,
) {
    EventBuilder::new(MARKET, "purchase", buyer)
        .field("buyer_id", buyer)
        .field("seller_id", seller)
        .field("item", item_key)
        .field("price", price)
        .field("marketplace_fee", fee)
        .field("pay_kind", pay_kind.as_str())
        .emit();
}

pub fn emit_offer_made(buyer: &AccountId, item_key: &str, amount: u128, expires_at: u64) {
    EventBuilder::new(MARKET, "make_offer", buyer)
        .field("buyer_id", buyer)
        .field("item", item_key)
        .field("amount", amount)
        .field("expires_at", expires_at)
        .emit();
}

pub fn emit_offer_cancelled(buyer: &AccountId, item_key: &str, amount: u128) {
    EventBuilder::new(MARKET, "cancel_offer", buyer)
        .field("buyer_id", buyer)
        .field("item", item_key)
        .field("amount", amount)
        .emit();
}

pub fn emit_offer_accepted(
    buyer: &AccountId,
    seller: &AccountId,
    item_key: &str,
    amount: u128,
    fee: u128,
) {
    EventBuilder::new(MARKET, "accept_offer", seller)
        .field("buyer_id", buyer)
        .field("seller_id", seller)
        .field("item", item_key)
        .field("amount", amount)
        .field("marketplace_fee", fee)
        .emit();
}

pub fn emit_auction_created(
    seller: &AccountId,
    item_key: &str,
    reserve_price: u128,
    end_time: u64,
) {
    EventBuilder::new(MARKET, "create_auction", seller)
        .field("seller_id", seller)
        .field("item", item_key)
        .field("reserve_price", reserve_price)
        .field("end_time", end_time)
        .emit();
}

pub fn emit_auction_bid(
    bidder: &AccountId,
    item_key: &str,
    amount: u128,
    refunded_bidder: Option<&AccountId>,
) {
    EventBuilder::new(MARKET, "place_bid", bidder)
        .field("bidder_id", bidder)
        .field("item", item_key)
        .field("amount", amount)
        .field_opt("refunded_bidder_id", refunded_bidder)
        .emit();
}

pub fn emit_bid_cancelled(bidder: &AccountId, item_key: &str, amount: u128) {
    EventBuilder::new(MARKET, "cancel_bid", bidder)
        .field("bidder_id", bidder)
        .field("item", item_key)
        .field("amount", amount)
        .emit();
}

pub fn emit_auction_settled(
    winner: &AccountId,
    seller: &AccountId,
    item_key: &str,
    amount: u128,
    fee: u128,
) {
    EventBuilder::new(MARKET, "accept_bid", seller)
        .field("bidder_id", winner)
        .field("seller_id", seller)
        .field("item", item_key)
        .field("amount", amount)
        .field("marketplace_fee", fee)
        .emit();
}

pub fn emit_auction_cancelled(seller: &AccountId, item_key: &str) {
    EventBuilder::new(MARKET, "cancel_auction", seller)
        .field("seller_id", seller)
        .field("item", item_key)
        .emit();
}

pub fn emit_blacklist_updated(author: &AccountId, nft_contract_id: &AccountId, blocked: bool) {
    EventBuilder::new(MARKET, "update_blacklist", author)
        .field("nft_contract_id", nft_contract_id)
        .field("blocked", blocked)
        .emit();
}

pub fn emit_fee_config_updated(author: &AccountId, marketplace_fee_bps: u16) {
    EventBuilder::new(MARKET, "update_fee_config", author)
        .field("marketplace_fee_bps", marketplace_fee_bps)
        .emit();
}
