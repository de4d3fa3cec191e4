//! Auction lifecycle: create, bid, cancel bid, settle, cancel.
//!
//! Each auction holds at most one escrowed bid at a time: a higher bid
//! refunds the displaced leader in the same call, so escrow never holds
//! more than the current highest bid per auction. The seller settles with
//! `accept_bid`, which carries no upper time bound; the bid locks once the
//! auction ends, except that a bid on an auction gone stale (seller lost
//! the token or approval through another channel) stays refundable, since
//! settlement can no longer reach it.

use crate::guards::{check_at_least_one_yocto, check_one_yocto};
use crate::*;

// --- Public entry points ---

#[near]
impl Contract {
    /// Open an auction for a token the caller owns. One auction per item.
    #[handle_result]
    pub fn create_auction(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
        reserve_price: U128,
        duration_seconds: u64,
    ) -> Result<(), MarketplaceError> {
        let caller = env::predecessor_account_id();
        self.internal_create_auction(
            &caller,
            &nft_contract_id,
            &token_id,
            reserve_price.0,
            duration_seconds,
        )
    }

    /// Bid the attached deposit. Must strictly exceed the current highest
    /// bid; the displaced leader is refunded in full.
    #[payable]
    #[handle_result]
    pub fn place_bid(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
    ) -> Result<(), MarketplaceError> {
        check_at_least_one_yocto()?;
        let bidder = env::predecessor_account_id();
        let amount = env::attached_deposit().as_yoctonear();
        self.internal_place_bid(&bidder, &nft_contract_id, &token_id, amount)
    }

    /// Retract the leading bid and reclaim its escrow. Only the current
    /// leader, and only while the auction is still running, unless the
    /// auction has gone stale and can never settle.
    #[handle_result]
    pub fn cancel_bid(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
    ) -> Result<(), MarketplaceError> {
        let bidder = env::predecessor_account_id();
        self.internal_cancel_bid(&bidder, &nft_contract_id, &token_id)
    }

    /// Settle the auction to the named bidder. Seller-driven; valid any
    /// time the named account holds the highest bid.
    #[payable]
    #[handle_result]
    pub fn accept_bid(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
        bidder_id: AccountId,
    ) -> Result<(), MarketplaceError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        self.internal_accept_bid(&caller, &nft_contract_id, &token_id, &bidder_id)
    }

    /// Close an auction that attracted no bids.
    #[handle_result]
    pub fn cancel_auction(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
    ) -> Result<(), MarketplaceError> {
        let caller = env::predecessor_account_id();
        self.internal_cancel_auction(&caller, &nft_contract_id, &token_id)
    }

    // --- Views ---

    pub fn get_auction(&self, nft_contract_id: AccountId, token_id: String) -> Option<AuctionView> {
        let item_key = Contract::make_item_key(&nft_contract_id, &token_id);
        self.auctions.get(&item_key).map(AuctionView::from)
    }
}

// --- Internal implementations ---

impl Contract {
    pub(crate) fn internal_create_auction(
        &mut self,
        caller: &AccountId,
        nft_contract_id: &AccountId,
        token_id: &str,
        reserve_price: u128,
        duration_seconds: u64,
    ) -> Result<(), MarketplaceError> {
        self.check_not_blacklisted(nft_contract_id)?;
        match self.internal_owner_of(nft_contract_id, token_id) {
            Some(owner) if &owner == caller => {}
            _ => return Err(MarketplaceError::NotOwner),
        }
        if !self.is_approved_for_marketplace(nft_contract_id, token_id, caller) {
            return Err(MarketplaceError::NotApproved);
        }

        let item_key = Contract::make_item_key(nft_contract_id, token_id);
        if self.auctions.contains_key(&item_key) {
            return Err(MarketplaceError::AuctionExists);
        }

        let now = env::block_timestamp();
        let end_time = now.saturating_add(duration_seconds.saturating_mul(NANOS_PER_SEC));
        self.auctions.insert(
            item_key.clone(),
            Auction {
                seller: caller.clone(),
                reserve_price,
                end_time,
                highest_bidder: None,
                highest_bid: 0,
                created_at: now,
            },
        );

        events::emit_auction_created(caller, &item_key, reserve_price, end_time);
        Ok(())
    }

    pub(crate) fn internal_place_bid(
        &mut self,
        bidder: &AccountId,
        nft_contract_id: &AccountId,
        token_id: &str,
        amount: u128,
    ) -> Result<(), MarketplaceError> {
        self.check_not_blacklisted(nft_contract_id)?;

        let item_key = Contract::make_item_key(nft_contract_id, token_id);
        let auction = self
            .auctions
            .get(&item_key)
            .cloned()
            .ok_or(MarketplaceError::AuctionDoesNotExist)?;

        // An auction whose seller lost the token or approval through another
        // channel is stale and cannot take new money.
        if !self.seller_can_still_sell(nft_contract_id, token_id, &auction.seller) {
            return Err(MarketplaceError::AuctionDoesNotExist);
        }
        if env::block_timestamp() >= auction.end_time {
            return Err(MarketplaceError::AuctionEnded);
        }
        if bidder == &auction.seller {
            return Err(MarketplaceError::OwnerCannotBid);
        }
        if auction.highest_bidder.as_ref() == Some(bidder) {
            return Err(MarketplaceError::MustCancelPrevious);
        }
        if amount == 0 || amount <= auction.highest_bid {
            return Err(MarketplaceError::InsufficientPayment);
        }

        let displaced = auction.highest_bidder.clone();
        if let Some(previous) = &displaced {
            self.escrow_release(previous, auction.highest_bid, PayKind::Native)?;
        }
        self.escrow_hold(bidder, amount, PayKind::Native);

        self.auctions.insert(
            item_key.clone(),
            Auction {
                highest_bidder: Some(bidder.clone()),
                highest_bid: amount,
                ..auction
            },
        );

        events::emit_auction_bid(bidder, &item_key, amount, displaced.as_ref());
        Ok(())
    }

    pub(crate) fn internal_cancel_bid(
        &mut self,
        bidder: &AccountId,
        nft_contract_id: &AccountId,
        token_id: &str,
    ) -> Result<(), MarketplaceError> {
        let item_key = Contract::make_item_key(nft_contract_id, token_id);
        let auction = self
            .auctions
            .get(&item_key)
            .cloned()
            .ok_or(MarketplaceError::AuctionDoesNotExist)?;
        if auction.highest_bidder.as_ref() != Some(bidder) {
            return Err(MarketplaceError::NotHighestBidder);
        }
        // After the close the bid is committed and only settlement can
        // resolve it. A stale auction can never settle, so its bid stays
        // refundable past the close.
        let stale = !self.seller_can_still_sell(nft_contract_id, token_id, &auction.seller);
        if !stale && env::block_timestamp() >= auction.end_time {
            return Err(MarketplaceError::TooLateToCancel);
        }

        let amount = auction.highest_bid;
        self.escrow_release(bidder, amount, PayKind::Native)?;
        self.auctions.insert(
            item_key.clone(),
            Auction {
                highest_bidder: None,
                highest_bid: 0,
                ..auction
            },
        );

        events::emit_bid_cancelled(bidder, &item_key, amount);
        Ok(())
    }

    pub(crate) fn internal_accept_bid(
        &mut self,
        caller: &AccountId,
        nft_contract_id: &AccountId,
        token_id: &str,
        bidder_id: &AccountId,
    ) -> Result<(), MarketplaceError> {
        let item_key = Contract::make_item_key(nft_contract_id, token_id);
        let auction = self
            .auctions
            .get(&item_key)
            .cloned()
            .ok_or(MarketplaceError::AuctionDoesNotExist)?;
        if !self.seller_can_still_sell(nft_contract_id, token_id, &auction.seller) {
            return Err(MarketplaceError::AuctionDoesNotExist);
        }
        if &auction.seller != caller {
            return Err(MarketplaceError::NotOwner);
        }
        if auction.highest_bidder.as_ref() != Some(bidder_id) {
            return Err(MarketplaceError::NotHighestBidder);
        }

        let fee = self.settle_from_escrow(bidder_id, caller, auction.highest_bid, PayKind::Native)?;
        self.internal_token_transfer(nft_contract_id, token_id, caller, bidder_id)?;
        self.auctions.remove(&item_key);

        events::emit_auction_settled(bidder_id, caller, &item_key, auction.highest_bid, fee);
        Ok(())
    }

    pub(crate) fn internal_cancel_auction(
        &mut self,
        caller: &AccountId,
        nft_contract_id: &AccountId,
        token_id: &str,
    ) -> Result<(), MarketplaceError> {
        let item_key = Contract::make_item_key(nft_contract_id, token_id);
        let auction = self
            .auctions
            .get(&item_key)
            .ok_or(MarketplaceError::AuctionDoesNotExist)?;
        if &auction.seller != caller {
            return Err(MarketplaceError::NotOwner);
        }
        if auction.highest_bidder.is_some() {
            return Err(MarketplaceError::AuctionHasBid);
        }

        self.auctions.remove(&item_key);
        events::emit_auction_cancelled(caller, &item_key);
        Ok(())
    }
}
