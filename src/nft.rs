//! Embedded token ledger: the single source of truth for ownership and
//! transfer approvals, keyed by `(nft_contract, token_id)` identity. The
//! marketplace core only touches it through the narrow capability surface
//! below (`internal_owner_of`, `is_approved_for_marketplace`,
//! `internal_token_transfer`); it never caches ownership.

use crate::guards::check_at_least_one_yocto;
use crate::*;

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct TokenRecord {
    pub owner_id: AccountId,
    /// Per-token transfer approval; cleared on every ownership change.
    pub approved_account: Option<AccountId>,
}

// --- Public entry points ---

#[near]
impl Contract {
    /// Seed a token under `(nft_contract_id, token_id)`. Minting policy is
    /// out of marketplace scope, so this is contract-owner gated.
    #[handle_result]
    pub fn mint(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
        receiver_id: AccountId,
    ) -> Result<(), MarketplaceError> {
        self.check_contract_owner()?;
        self.internal_mint(&nft_contract_id, &token_id, &receiver_id)
    }

    /// Grant per-token transfer approval. Only the current owner.
    #[payable]
    #[handle_result]
    pub fn approve(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
        account_id: AccountId,
    ) -> Result<(), MarketplaceError> {
        check_at_least_one_yocto()?;
        let caller = env::predecessor_account_id();
        self.internal_approve(&caller, &nft_contract_id, &token_id, &account_id)
    }

    /// Grant or revoke blanket operator approval for every token the caller
    /// owns under `nft_contract_id`.
    pub fn set_approval_for_all(
        &mut self,
        nft_contract_id: AccountId,
        operator: AccountId,
        approved: bool,
    ) {
        let caller = env::predecessor_account_id();
        self.internal_set_approval_for_all(&caller, &nft_contract_id, &operator, approved);
    }

    pub fn owner_of(&self, nft_contract_id: AccountId, token_id: String) -> Option<AccountId> {
        self.internal_owner_of(&nft_contract_id, &token_id)
    }

    pub fn is_approved_for_all(
        &self,
        nft_contract_id: AccountId,
        owner_id: AccountId,
        operator: AccountId,
    ) -> bool {
        self.internal_is_approved_for_all(&nft_contract_id, &owner_id, &operator)
    }

    /// Number of tokens owned by `account_id` across all contracts.
    pub fn nft_supply_for_owner(&self, account_id: AccountId) -> u64 {
        self.tokens_by_id
            .iter()
            .filter(|(_, t)| t.owner_id == account_id)
            .count() as u64
    }
}

// --- Internal implementations ---

impl Contract {
    pub(crate) fn internal_mint(
        &mut self,
        nft_contract_id: &AccountId,
        token_id: &str,
        receiver_id: &AccountId,
    ) -> Result<(), MarketplaceError> {
        let key = Contract::make_item_key(nft_contract_id, token_id);
        near_sdk::require!(!self.tokens_by_id.contains_key(&key), "Token already minted");
        self.tokens_by_id.insert(
            key,
            TokenRecord {
                owner_id: receiver_id.clone(),
                approved_account: None,
            },
        );
        Ok(())
    }

    pub(crate) fn internal_owner_of(
        &self,
        nft_contract_id: &AccountId,
        token_id: &str,
    ) -> Option<AccountId> {
        let key = Contract::make_item_key(nft_contract_id, token_id);
        self.tokens_by_id.get(&key).map(|t| t.owner_id.clone())
    }

    pub(crate) fn internal_approve(
        &mut self,
        caller: &AccountId,
        nft_contract_id: &AccountId,
        token_id: &str,
        account_id: &AccountId,
    ) -> Result<(), MarketplaceError> {
        let key = Contract::make_item_key(nft_contract_id, token_id);
        let token = self
            .tokens_by_id
            .get_mut(&key)
            .ok_or(MarketplaceError::TokenNotFound)?;
        if &token.owner_id != caller {
            return Err(MarketplaceError::NotOwner);
        }
        token.approved_account = Some(account_id.clone());
        Ok(())
    }

    pub(crate) fn internal_set_approval_for_all(
        &mut self,
        caller: &AccountId,
        nft_contract_id: &AccountId,
        operator: &AccountId,
        approved: bool,
    ) {
        let key = operator_key(nft_contract_id, caller, operator);
        if approved {
            self.operator_approvals.insert(key, true);
        } else {
            self.operator_approvals.remove(&key);
        }
    }

    pub(crate) fn internal_is_approved_for_all(
        &self,
        nft_contract_id: &AccountId,
        owner_id: &AccountId,
        operator: &AccountId,
    ) -> bool {
        let key = operator_key(nft_contract_id, owner_id, operator);
        self.operator_approvals.get(&key).copied().unwrap_or(false)
    }

    /// Whether this marketplace may transfer the token on the owner's behalf,
    /// via either per-token or blanket approval.
    pub(crate) fn is_approved_for_marketplace(
        &self,
        nft_contract_id: &AccountId,
        token_id: &str,
        owner_id: &AccountId,
    ) -> bool {
        let marketplace = env::current_account_id();
        let key = Contract::make_item_key(nft_contract_id, token_id);
        let by_token = self
            .tokens_by_id
            .get(&key)
            .is_some_and(|t| t.approved_account.as_ref() == Some(&marketplace));
        by_token || self.internal_is_approved_for_all(nft_contract_id, owner_id, &marketplace)
    }

    /// Move ownership. Clears the per-token approval; the final, atomic step
    /// of every successful sale.
    pub(crate) fn internal_token_transfer(
        &mut self,
        nft_contract_id: &AccountId,
        token_id: &str,
        from: &AccountId,
        to: &AccountId,
    ) -> Result<(), MarketplaceError> {
        let key = Contract::make_item_key(nft_contract_id, token_id);
        let token = self
            .tokens_by_id
            .get_mut(&key)
            .ok_or(MarketplaceError::TokenNotFound)?;
        if &token.owner_id != from {
            return Err(MarketplaceError::NotOwner);
        }
        token.owner_id = to.clone();
        token.approved_account = None;
        Ok(())
    }
}

pub(crate) fn operator_key(
    nft_contract_id: &AccountId,
    owner_id: &AccountId,
    operator: &AccountId,
) -> String {
    format!("{}\0{}\0{}", nft_contract_id, owner_id, operator)
}
