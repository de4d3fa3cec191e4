//! Offer domain types.

use near_sdk::json_types::U128;
use near_sdk::near;
use near_sdk::AccountId;

/// One buyer's standing offer on one item. Funds for `amount` sit in
/// escrow while `withdrawn` is false.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Offer {
    pub buyer_id: AccountId,
    /// Always > 0.
    pub amount: u128,
    /// Nanosecond timestamp; the offer is acceptable strictly before this.
    pub expires_at: u64,
    pub withdrawn: bool,
    pub created_at: u64,
}

impl Offer {
    /// Live offers hold escrowed funds and block a replacement.
    pub fn is_live(&self, now: u64) -> bool {
        !self.withdrawn && now < self.expires_at
    }
}

/// JSON projection of an offer for view calls.
#[near(serializers = [json])]
pub struct OfferView {
    pub buyer_id: AccountId,
    pub amount: U128,
    pub expires_at: u64,
    pub withdrawn: bool,
    pub created_at: u64,
}

impl From<&Offer> for OfferView {
    fn from(offer: &Offer) -> Self {
        Self {
            buyer_id: offer.buyer_id.clone(),
            amount: U128(offer.amount),
            expires_at: offer.expires_at,
            withdrawn: offer.withdrawn,
            created_at: offer.created_at,
        }
    }
}
