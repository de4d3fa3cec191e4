//! Embedded fungible-currency ledger with standard allowance semantics.
//! Backs the `PayKind::Fungible` payment channel; escrowed fungible funds
//! sit on the marketplace's own custody account.

use crate::*;

// --- Public entry points ---

#[near]
impl Contract {
    /// Seed fungible balances. Contract-owner gated; issuance policy is out
    /// of marketplace scope.
    #[handle_result]
    pub fn ft_mint(&mut self, account_id: AccountId, amount: U128) -> Result<(), MarketplaceError> {
        self.check_contract_owner()?;
        self.internal_ft_credit(&account_id, amount.0);
        Ok(())
    }

    #[handle_result]
    pub fn ft_transfer(
        &mut self,
        receiver_id: AccountId,
        amount: U128,
    ) -> Result<(), MarketplaceError> {
        let caller = env::predecessor_account_id();
        self.internal_ft_debit(&caller, amount.0)?;
        self.internal_ft_credit(&receiver_id, amount.0);
        Ok(())
    }

    /// Set (overwrite) the allowance `spender` may pull from the caller.
    pub fn ft_approve(&mut self, spender: AccountId, amount: U128) {
        let caller = env::predecessor_account_id();
        self.ft_allowances
            .insert(allowance_key(&caller, &spender), amount.0);
    }

    pub fn ft_balance_of(&self, account_id: AccountId) -> U128 {
        U128(self.ft_balances.get(&account_id).copied().unwrap_or(0))
    }

    pub fn ft_allowance(&self, owner_id: AccountId, spender: AccountId) -> U128 {
        U128(
            self.ft_allowances
                .get(&allowance_key(&owner_id, &spender))
                .copied()
                .unwrap_or(0),
        )
    }
}

// --- Internal implementations ---

impl Contract {
    pub(crate) fn internal_ft_credit(&mut self, account_id: &AccountId, amount: u128) {
        if amount == 0 {
            return;
        }
        let balance = self.ft_balances.get(account_id).copied().unwrap_or(0);
        self.ft_balances
            .insert(account_id.clone(), balance.saturating_add(amount));
    }

    pub(crate) fn internal_ft_debit(
        &mut self,
        account_id: &AccountId,
        amount: u128,
    ) -> Result<(), MarketplaceError> {
        let balance = self.ft_balances.get(account_id).copied().unwrap_or(0);
        let remaining = balance
            .checked_sub(amount)
            .ok_or(MarketplaceError::InsufficientPayment)?;
        self.ft_balances.insert(account_id.clone(), remaining);
        Ok(())
    }

    /// Pull `amount` from `owner_id` into `receiver_id` on behalf of
    /// `spender` within the pulled allowance.
    pub(crate) fn internal_ft_transfer_from(
        &mut self,
        spender: &AccountId,
        owner_id: &AccountId,
        receiver_id: &AccountId,
        amount: u128,
    ) -> Result<(), MarketplaceError> {
        let key = allowance_key(owner_id, spender);
        let allowance = self.ft_allowances.get(&key).copied().unwrap_or(0);
        let remaining = allowance
            .checked_sub(amount)
            .ok_or(MarketplaceError::InsufficientPayment)?;
        self.internal_ft_debit(owner_id, amount)?;
        self.ft_allowances.insert(key, remaining);
        self.internal_ft_credit(receiver_id, amount);
        Ok(())
    }
}

pub(crate) fn allowance_key(owner_id: &AccountId, spender: &AccountId) -> String {
    format!("{}\0{}", owner_id, spender)
}
