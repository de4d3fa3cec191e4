//! Marketplace fee configuration and the fee-split rounding contract.

use crate::*;

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct FeeConfig {
    /// 200 = 2.0%. Deducted from the seller's proceeds on every settled
    /// buy / accept_offer / accept_bid; the payer never pays above the
    /// agreed amount.
    pub marketplace_fee_bps: u16,
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            marketplace_fee_bps: DEFAULT_MARKETPLACE_FEE_BPS,
        }
    }
}

impl Contract {
    /// Split `price` into `(seller_amount, fee)`. The seller payout rounds
    /// down; the fee recipient absorbs the integer-division remainder, so
    /// `seller_amount + fee == price` always holds. Quotient and remainder
    /// are scaled separately so the split cannot overflow near `u128::MAX`.
    pub(crate) fn split_proceeds(&self, price: u128) -> (u128, u128) {
        let basis = BASIS_POINTS as u128;
        let keep_bps = (BASIS_POINTS - self.fee_config.marketplace_fee_bps) as u128;
        let seller_amount = price / basis * keep_bps + price % basis * keep_bps / basis;
        (seller_amount, price - seller_amount)
    }

    /// Pay out a settled sale from the payer's escrowed funds: seller share
    /// first, then the fee cut to the fee recipient.
    pub(crate) fn settle_from_escrow(
        &mut self,
        payer: &AccountId,
        seller: &AccountId,
        price: u128,
        pay_kind: PayKind,
    ) -> Result<u128, MarketplaceError> {
        let (seller_amount, fee) = self.split_proceeds(price);
        self.escrow_transfer_held(payer, seller, seller_amount, pay_kind)?;
        if fee > 0 {
            let fee_recipient = self.fee_recipient.clone();
            self.escrow_transfer_held(payer, &fee_recipient, fee, pay_kind)?;
        }
        Ok(fee)
    }
}
