//! Listing entry points and internal logic.

use crate::*;

// --- Public entry points ---

#[near]
impl Contract {
    /// List (or relist) an item at a fixed price. Relisting overwrites the
    /// prior terms; there is at most one active listing per item.
    #[handle_result]
    pub fn list_item(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
        price: U128,
        pay_kind: PayKind,
    ) -> Result<(), MarketplaceError> {
        let caller = env::predecessor_account_id();
        self.internal_list_item(&caller, &nft_contract_id, &token_id, price.0, pay_kind)
    }

    /// List several items from the caller's wallet at a shared price.
    /// Requires blanket marketplace approval per token contract beforehand.
    #[handle_result]
    pub fn batch_list(
        &mut self,
        nft_contract_ids: Vec<AccountId>,
        token_ids: Vec<String>,
        price: U128,
        pay_kind: PayKind,
    ) -> Result<(), MarketplaceError> {
        let caller = env::predecessor_account_id();
        self.internal_batch_list(&caller, &nft_contract_ids, &token_ids, price.0, pay_kind)
    }

    #[handle_result]
    pub fn cancel_listing(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
    ) -> Result<(), MarketplaceError> {
        let caller = env::predecessor_account_id();
        self.internal_cancel_listing(&caller, &nft_contract_id, &token_id)
    }
}

// --- Internal implementations ---

impl Contract {
    pub(crate) fn internal_list_item(
        &mut self,
        caller: &AccountId,
        nft_contract_id: &AccountId,
        token_id: &str,
        price: u128,
        pay_kind: PayKind,
    ) -> Result<(), MarketplaceError> {
        self.check_not_blacklisted(nft_contract_id)?;
        if price == 0 {
            return Err(MarketplaceError::InvalidPrice);
        }
        match self.internal_owner_of(nft_contract_id, token_id) {
            Some(owner) if &owner == caller => {}
            _ => return Err(MarketplaceError::NotOwner),
        }
        if !self.is_approved_for_marketplace(nft_contract_id, token_id, caller) {
            return Err(MarketplaceError::NotApproved);
        }

        let item_key = Contract::make_item_key(nft_contract_id, token_id);
        self.listings.insert(
            item_key.clone(),
            Listing {
                seller: caller.clone(),
                price,
                pay_kind,
                created_at: env::block_timestamp(),
            },
        );

        events::emit_listed(caller, &item_key, price, pay_kind);
        Ok(())
    }

    pub(crate) fn internal_batch_list(
        &mut self,
        caller: &AccountId,
        nft_contract_ids: &[AccountId],
        token_ids: &[String],
        price: u128,
        pay_kind: PayKind,
    ) -> Result<(), MarketplaceError> {
        if nft_contract_ids.len() != token_ids.len() {
            return Err(MarketplaceError::LengthMismatch);
        }
        if nft_contract_ids.is_empty() || nft_contract_ids.len() > MAX_BATCH_LIST {
            return Err(MarketplaceError::LengthMismatch);
        }

        // Validate the whole batch before touching the registry so a failure
        // on any item leaves nothing listed.
        let marketplace = env::current_account_id();
        for (nft_contract_id, token_id) in nft_contract_ids.iter().zip(token_ids) {
            self.check_not_blacklisted(nft_contract_id)?;
            if price == 0 {
                return Err(MarketplaceError::InvalidPrice);
            }
            match self.internal_owner_of(nft_contract_id, token_id) {
                Some(owner) if &owner == caller => {}
                _ => return Err(MarketplaceError::NotOwner),
            }
            // Blanket approval must already cover every contract involved;
            // per-token approvals are not accepted on the batch path.
            if !self.internal_is_approved_for_all(nft_contract_id, caller, &marketplace) {
                return Err(MarketplaceError::ApprovalRequired);
            }
        }

        for (nft_contract_id, token_id) in nft_contract_ids.iter().zip(token_ids) {
            self.internal_list_item(caller, nft_contract_id, token_id, price, pay_kind)?;
        }
        Ok(())
    }

    pub(crate) fn internal_cancel_listing(
        &mut self,
        caller: &AccountId,
        nft_contract_id: &AccountId,
        token_id: &str,
    ) -> Result<(), MarketplaceError> {
        let item_key = Contract::make_item_key(nft_contract_id, token_id);
        let listing = self
            .listings
            .get(&item_key)
            .ok_or(MarketplaceError::NotListed)?;
        if &listing.seller != caller {
            return Err(MarketplaceError::NotOwner);
        }

        self.listings.remove(&item_key);
        events::emit_listing_cancelled(caller, &item_key);
        Ok(())
    }
}
