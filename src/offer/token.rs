//! Offer lifecycle: make, cancel, accept.
//!
//! An offer is funded at creation and the funds stay in escrow until the
//! buyer cancels or the owner accepts. Expiry is checked lazily: an expired
//! offer cannot be accepted, and its escrow stays reclaimable through
//! `cancel_offer` at any time.

use crate::guards::{check_at_least_one_yocto, check_one_yocto};
use crate::offer::offer_key;
use crate::*;

// --- Public entry points ---

#[near]
impl Contract {
    /// Place an offer on a token, funded by the attached deposit. A buyer
    /// has at most one offer per item; a live prior offer must be cancelled
    /// first, while an expired or withdrawn one is replaced in place.
    #[payable]
    #[handle_result]
    pub fn make_offer(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
        ttl_seconds: u64,
    ) -> Result<(), MarketplaceError> {
        check_at_least_one_yocto()?;
        let buyer = env::predecessor_account_id();
        let amount = env::attached_deposit().as_yoctonear();
        self.internal_make_offer(&buyer, &nft_contract_id, &token_id, amount, ttl_seconds)
    }

    /// Withdraw an offer and reclaim its escrowed funds. Permitted at any
    /// time, expired or not.
    #[handle_result]
    pub fn cancel_offer(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
    ) -> Result<(), MarketplaceError> {
        let buyer = env::predecessor_account_id();
        self.internal_cancel_offer(&buyer, &nft_contract_id, &token_id)
    }

    /// Accept a buyer's offer. Caller must be the token's current owner;
    /// proceeds settle out of the buyer's escrow.
    #[payable]
    #[handle_result]
    pub fn accept_offer(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
        buyer_id: AccountId,
    ) -> Result<(), MarketplaceError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        self.internal_accept_offer(&caller, &nft_contract_id, &token_id, &buyer_id)
    }

    // --- Views ---

    pub fn get_offer(
        &self,
        nft_contract_id: AccountId,
        token_id: String,
        buyer_id: AccountId,
    ) -> Option<OfferView> {
        let item_key = Contract::make_item_key(&nft_contract_id, &token_id);
        self.offers
            .get(&offer_key(&item_key, &buyer_id))
            .map(OfferView::from)
    }

    /// All open (not withdrawn) offers on one token, expired ones included.
    pub fn get_offers_for_token(
        &self,
        nft_contract_id: AccountId,
        token_id: String,
    ) -> Vec<OfferView> {
        let item_key = Contract::make_item_key(&nft_contract_id, &token_id);
        let prefix = format!("{}\0", item_key);
        self.offers
            .iter()
            .filter(|(key, offer)| key.starts_with(&prefix) && !offer.withdrawn)
            .map(|(_, offer)| OfferView::from(offer))
            .collect()
    }
}

// --- Internal implementations ---

impl Contract {
    pub(crate) fn internal_make_offer(
        &mut self,
        buyer: &AccountId,
        nft_contract_id: &AccountId,
        token_id: &str,
        amount: u128,
        ttl_seconds: u64,
    ) -> Result<(), MarketplaceError> {
        self.check_not_blacklisted(nft_contract_id)?;
        if amount == 0 {
            return Err(MarketplaceError::InvalidPrice);
        }

        let owner = self
            .internal_owner_of(nft_contract_id, token_id)
            .ok_or(MarketplaceError::TokenNotFound)?;
        if &owner == buyer {
            return Err(MarketplaceError::OwnerCannotOffer);
        }

        let now = env::block_timestamp();
        let item_key = Contract::make_item_key(nft_contract_id, token_id);
        let key = offer_key(&item_key, buyer);
        if let Some(previous) = self.offers.get(&key) {
            if previous.is_live(now) {
                return Err(MarketplaceError::DuplicateOffer);
            }
            // Expired but never withdrawn: its escrow is still held, so
            // refund it before the replacement takes over the slot.
            if !previous.withdrawn {
                let refund = previous.amount;
                self.escrow_release(buyer, refund, PayKind::Native)?;
            }
        }

        let expires_at = now.saturating_add(ttl_seconds.saturating_mul(NANOS_PER_SEC));
        self.escrow_hold(buyer, amount, PayKind::Native);
        self.offers.insert(
            key,
            Offer {
                buyer_id: buyer.clone(),
                amount,
                expires_at,
                withdrawn: false,
                created_at: now,
            },
        );

        events::emit_offer_made(buyer, &item_key, amount, expires_at);
        Ok(())
    }

    pub(crate) fn internal_cancel_offer(
        &mut self,
        buyer: &AccountId,
        nft_contract_id: &AccountId,
        token_id: &str,
    ) -> Result<(), MarketplaceError> {
        let item_key = Contract::make_item_key(nft_contract_id, token_id);
        let key = offer_key(&item_key, buyer);
        let offer = self
            .offers
            .get_mut(&key)
            .ok_or(MarketplaceError::OfferDoesNotExist)?;
        if offer.withdrawn {
            return Err(MarketplaceError::AlreadyWithdrawn);
        }

        offer.withdrawn = true;
        let amount = offer.amount;
        self.escrow_release(buyer, amount, PayKind::Native)?;

        events::emit_offer_cancelled(buyer, &item_key, amount);
        Ok(())
    }

    pub(crate) fn internal_accept_offer(
        &mut self,
        caller: &AccountId,
        nft_contract_id: &AccountId,
        token_id: &str,
        buyer_id: &AccountId,
    ) -> Result<(), MarketplaceError> {
        let owner = self
            .internal_owner_of(nft_contract_id, token_id)
            .ok_or(MarketplaceError::TokenNotFound)?;
        if &owner != caller {
            return Err(MarketplaceError::NotOwner);
        }
        if !self.is_approved_for_marketplace(nft_contract_id, token_id, caller) {
            return Err(MarketplaceError::NotApproved);
        }

        let item_key = Contract::make_item_key(nft_contract_id, token_id);
        let key = offer_key(&item_key, buyer_id);
        let offer = self
            .offers
            .get(&key)
            .cloned()
            .ok_or(MarketplaceError::OfferDoesNotExist)?;
        if offer.withdrawn {
            return Err(MarketplaceError::AlreadyWithdrawn);
        }
        if env::block_timestamp() >= offer.expires_at {
            return Err(MarketplaceError::OfferExpired);
        }

        let fee = self.settle_from_escrow(buyer_id, caller, offer.amount, PayKind::Native)?;
        self.internal_token_transfer(nft_contract_id, token_id, caller, buyer_id)?;
        self.offers.remove(&key);

        events::emit_offer_accepted(buyer_id, caller, &item_key, offer.amount, fee);
        Ok(())
    }
}
