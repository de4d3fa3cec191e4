// Internal helper functions for the marketplace

use crate::*;

impl Contract {
    /// Composite item identity used as the key of every registry.
    pub(crate) fn make_item_key(nft_contract_id: &AccountId, token_id: &str) -> String {
        format!("{}{}{}", nft_contract_id, DELIMETER, token_id)
    }

    /// Re-check-on-entry: a sale channel is satisfiable only while the
    /// recorded seller still owns the token and the marketplace still holds
    /// transfer approval. Never cached; evaluated at the top of every
    /// state-changing call so records gone stale through another channel
    /// fail lazily instead of being eagerly invalidated.
    pub(crate) fn seller_can_still_sell(
        &self,
        nft_contract_id: &AccountId,
        token_id: &str,
        seller: &AccountId,
    ) -> bool {
        match self.internal_owner_of(nft_contract_id, token_id) {
            Some(owner) => {
                owner == *seller
                    && self.is_approved_for_marketplace(nft_contract_id, token_id, seller)
            }
            None => false,
        }
    }
}
