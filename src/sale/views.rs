//! Read-only listing queries.

use crate::*;

#[near]
impl Contract {
    /// Current listing state for an item. A cancelled or sold item reports
    /// `is_listed: false` with zeroed terms rather than an error.
    pub fn get_item_info(&self, nft_contract_id: AccountId, token_id: String) -> ItemInfo {
        let item_key = Contract::make_item_key(&nft_contract_id, &token_id);
        match self.listings.get(&item_key) {
            Some(listing) => ItemInfo {
                is_listed: true,
                price: U128(listing.price),
                pay_kind: Some(listing.pay_kind),
                seller: Some(listing.seller.clone()),
            },
            None => ItemInfo {
                is_listed: false,
                price: U128(0),
                pay_kind: None,
                seller: None,
            },
        }
    }

    /// Paginated dump of the listing registry, keyed by item key.
    pub fn get_listings(
        &self,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<(String, Listing)> {
        let start = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50) as usize;
        self.listings
            .iter()
            .skip(start)
            .take(limit)
            .map(|(key, listing)| (key.clone(), listing.clone()))
            .collect()
    }

    pub fn get_listing_count(&self) -> u64 {
        self.listings.len() as u64
    }
}
