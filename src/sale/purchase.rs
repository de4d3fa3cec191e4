//! Fixed-price purchase: full validation up front, then escrow movement,
//! token transfer, and listing removal as one transactional step.

use crate::guards::check_at_least_one_yocto;
use crate::*;

// --- Public entry points ---

#[near]
impl Contract {
    /// Buy a listed item. Native purchases tender the attached deposit;
    /// fungible purchases tender `amount` pulled through the caller's
    /// allowance to the marketplace.
    #[payable]
    #[handle_result]
    pub fn buy(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
        pay_kind: PayKind,
        amount: Option<U128>,
    ) -> Result<(), MarketplaceError> {
        let buyer = env::predecessor_account_id();
        let tendered = match pay_kind {
            PayKind::Native => {
                check_at_least_one_yocto()?;
                env::attached_deposit().as_yoctonear()
            }
            PayKind::Fungible => amount.ok_or(MarketplaceError::InsufficientPayment)?.0,
        };
        self.internal_buy(&buyer, &nft_contract_id, &token_id, tendered, pay_kind)
    }
}

// --- Internal implementations ---

impl Contract {
    pub(crate) fn internal_buy(
        &mut self,
        buyer: &AccountId,
        nft_contract_id: &AccountId,
        token_id: &str,
        tendered: u128,
        pay_kind: PayKind,
    ) -> Result<(), MarketplaceError> {
        self.check_not_blacklisted(nft_contract_id)?;

        let item_key = Contract::make_item_key(nft_contract_id, token_id);
        let listing = self
            .listings
            .get(&item_key)
            .cloned()
            .ok_or(MarketplaceError::NotListed)?;

        // A listing that survived a sale through another channel is stale;
        // the ownership re-check fails it lazily.
        if !self.seller_can_still_sell(nft_contract_id, token_id, &listing.seller) {
            return Err(MarketplaceError::NotListed);
        }
        if listing.pay_kind != pay_kind {
            return Err(MarketplaceError::WrongPayKind);
        }
        if tendered < listing.price {
            return Err(MarketplaceError::InsufficientPayment);
        }

        // Fungible funds move into custody before escrow records them; the
        // pull is also the last fallible step, so no mutation survives an
        // allowance or balance shortfall.
        if pay_kind == PayKind::Fungible {
            let marketplace = env::current_account_id();
            self.internal_ft_transfer_from(&marketplace, buyer, &marketplace, tendered)?;
        }

        self.escrow_hold(buyer, tendered, pay_kind);
        let fee = self.settle_from_escrow(buyer, &listing.seller, listing.price, pay_kind)?;
        let excess = tendered - listing.price;
        if excess > 0 {
            self.escrow_release(buyer, excess, pay_kind)?;
        }

        self.internal_token_transfer(nft_contract_id, token_id, &listing.seller, buyer)?;
        self.listings.remove(&item_key);

        events::emit_purchase(
            buyer,
            &listing.seller,
            &item_key,
            listing.price,
            fee,
            pay_kind,
        );
        Ok(())
    }
}
