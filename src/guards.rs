//! Deposit and authorization guards shared by public entry points.

use crate::*;

/// Check exactly one yoctoNEAR is attached (security measure for
/// owner-initiated settlement calls).
pub(crate) fn check_one_yocto() -> Result<(), MarketplaceError> {
    if env::attached_deposit() != ONE_YOCTO {
        return Err(MarketplaceError::InsufficientPayment);
    }
    Ok(())
}

/// Check at least one yoctoNEAR is attached.
pub(crate) fn check_at_least_one_yocto() -> Result<(), MarketplaceError> {
    if env::attached_deposit() < ONE_YOCTO {
        return Err(MarketplaceError::InsufficientPayment);
    }
    Ok(())
}

impl Contract {
    /// Only the contract owner may perform admin actions.
    pub(crate) fn check_contract_owner(&self) -> Result<(), MarketplaceError> {
        if env::predecessor_account_id() != self.owner_id {
            return Err(MarketplaceError::NotOwner);
        }
        Ok(())
    }

    /// Blacklist gate, consulted before every channel-opening operation.
    pub(crate) fn check_not_blacklisted(
        &self,
        nft_contract_id: &AccountId,
    ) -> Result<(), MarketplaceError> {
        if self.blacklist.contains(nft_contract_id) {
            return Err(MarketplaceError::Blacklisted);
        }
        Ok(())
    }
}
