//! Escrow ledger: custody of funds pending settlement or refund.
//!
//! Held balances are keyed by `(party, pay_kind)`; running totals keep the
//! conservation invariant directly assertable: at any point,
//! `deposited == sum(held) + released` per pay kind, and no release can
//! exceed what is held for the party (checked subtraction, never silent).
//! Native releases pay out through a transfer `Promise`; fungible releases
//! move internal ledger balances out of the custody account.

use crate::*;

#[near(serializers = [borsh, json])]
#[derive(Clone, Default)]
pub struct EscrowTotals {
    pub native_deposited: u128,
    pub native_released: u128,
    pub fungible_deposited: u128,
    pub fungible_released: u128,
}

// --- Views ---

#[near]
impl Contract {
    pub fn get_escrow_balance(&self, account_id: AccountId, pay_kind: PayKind) -> U128 {
        U128(
            self.escrow_held
                .get(&escrow_key(&account_id, pay_kind))
                .copied()
                .unwrap_or(0),
        )
    }

    pub fn get_escrow_totals(&self) -> EscrowTotals {
        self.escrow_totals.clone()
    }
}

// --- Internal implementations ---

impl Contract {
    /// Take custody of `amount` on behalf of `party`. Native funds arrive as
    /// the attached deposit; fungible funds must already sit on the custody
    /// account when this is recorded.
    pub(crate) fn escrow_hold(&mut self, party: &AccountId, amount: u128, pay_kind: PayKind) {
        if amount == 0 {
            return;
        }
        let key = escrow_key(party, pay_kind);
        let held = self.escrow_held.get(&key).copied().unwrap_or(0);
        self.escrow_held.insert(key, held.saturating_add(amount));
        match pay_kind {
            PayKind::Native => {
                self.escrow_totals.native_deposited =
                    self.escrow_totals.native_deposited.saturating_add(amount);
            }
            PayKind::Fungible => {
                self.escrow_totals.fungible_deposited =
                    self.escrow_totals.fungible_deposited.saturating_add(amount);
            }
        }
    }

    /// Pay `amount` of `party`'s held funds back out to `party`.
    pub(crate) fn escrow_release(
        &mut self,
        party: &AccountId,
        amount: u128,
        pay_kind: PayKind,
    ) -> Result<(), MarketplaceError> {
        self.escrow_debit_held(party, amount, pay_kind)?;
        self.escrow_pay_out(party, amount, pay_kind);
        Ok(())
    }

    /// Pay `amount` of `from`'s held funds out to `to`; the fee-split path
    /// of every settlement.
    pub(crate) fn escrow_transfer_held(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: u128,
        pay_kind: PayKind,
    ) -> Result<(), MarketplaceError> {
        self.escrow_debit_held(from, amount, pay_kind)?;
        self.escrow_pay_out(to, amount, pay_kind);
        Ok(())
    }

    fn escrow_debit_held(
        &mut self,
        party: &AccountId,
        amount: u128,
        pay_kind: PayKind,
    ) -> Result<(), MarketplaceError> {
        if amount == 0 {
            return Ok(());
        }
        let key = escrow_key(party, pay_kind);
        let held = self.escrow_held.get(&key).copied().unwrap_or(0);
        let remaining = held
            .checked_sub(amount)
            .ok_or(MarketplaceError::InsufficientPayment)?;
        if remaining == 0 {
            self.escrow_held.remove(&key);
        } else {
            self.escrow_held.insert(key, remaining);
        }
        Ok(())
    }

    fn escrow_pay_out(&mut self, to: &AccountId, amount: u128, pay_kind: PayKind) {
        if amount == 0 {
            return;
        }
        match pay_kind {
            PayKind::Native => {
                self.escrow_totals.native_released =
                    self.escrow_totals.native_released.saturating_add(amount);
                let _ = Promise::new(to.clone()).transfer(NearToken::from_yoctonear(amount));
            }
            PayKind::Fungible => {
                self.escrow_totals.fungible_released =
                    self.escrow_totals.fungible_released.saturating_add(amount);
                let custody = env::current_account_id();
                // Custody balance was credited when the funds were pulled in.
                let _ = self.internal_ft_debit(&custody, amount);
                self.internal_ft_credit(to, amount);
            }
        }
    }
}

pub(crate) fn escrow_key(party: &AccountId, pay_kind: PayKind) -> String {
    format!("{}\0{}", party, pay_kind.as_str())
}
