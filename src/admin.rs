//! Owner-gated administration: fee configuration and the blacklist gate.

use crate::*;

#[near]
impl Contract {
    /// Update the marketplace fee. Capped so a misconfiguration can never
    /// confiscate seller proceeds.
    #[handle_result]
    pub fn update_fee_config(&mut self, marketplace_fee_bps: u16) -> Result<(), MarketplaceError> {
        self.check_contract_owner()?;
        if marketplace_fee_bps > MAX_MARKETPLACE_FEE_BPS {
            return Err(MarketplaceError::InvalidPrice);
        }
        self.fee_config.marketplace_fee_bps = marketplace_fee_bps;
        events::emit_fee_config_updated(&env::predecessor_account_id(), marketplace_fee_bps);
        Ok(())
    }

    #[handle_result]
    pub fn set_fee_recipient(&mut self, fee_recipient: AccountId) -> Result<(), MarketplaceError> {
        self.check_contract_owner()?;
        self.fee_recipient = fee_recipient;
        Ok(())
    }

    /// Block a token contract. Funds escrowed before blacklisting stay
    /// reclaimable through the cancel paths, which skip the gate.
    #[handle_result]
    pub fn add_to_blacklist(
        &mut self,
        nft_contract_id: AccountId,
    ) -> Result<(), MarketplaceError> {
        self.check_contract_owner()?;
        self.blacklist.insert(nft_contract_id.clone());
        events::emit_blacklist_updated(&env::predecessor_account_id(), &nft_contract_id, true);
        Ok(())
    }

    #[handle_result]
    pub fn remove_from_blacklist(
        &mut self,
        nft_contract_id: AccountId,
    ) -> Result<(), MarketplaceError> {
        self.check_contract_owner()?;
        self.blacklist.remove(&nft_contract_id);
        events::emit_blacklist_updated(&env::predecessor_account_id(), &nft_contract_id, false);
        Ok(())
    }

    pub fn is_blacklisted(&self, nft_contract_id: AccountId) -> bool {
        self.blacklist.contains(&nft_contract_id)
    }

    pub fn get_fee_config(&self) -> FeeConfig {
        self.fee_config.clone()
    }
}
