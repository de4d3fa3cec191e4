//! NFT marketplace engine: fixed-price listings, time-bounded purchase
//! offers, and English auctions over `(nft_contract, token_id)` pairs, with
//! funds held in escrow and released atomically with ownership transfer.

use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{env, near, AccountId, BorshStorageKey, NearToken, PanicOnDefault, Promise};

// --- Modules ---

mod admin;
mod auction;
pub mod constants;
mod errors;
mod escrow;
mod events;
mod fees;
mod fungible;
mod guards;
mod internal;
mod nft;
mod offer;
mod sale;

#[cfg(test)]
mod tests;

pub use auction::{Auction, AuctionView};
pub use constants::*;
pub use errors::MarketplaceError;
pub use escrow::EscrowTotals;
pub use fees::FeeConfig;
pub use nft::TokenRecord;
pub use offer::{Offer, OfferView};
pub use sale::{ItemInfo, Listing, PayKind};

// --- Storage Keys ---

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Listings,
    Offers,
    Auctions,
    Blacklist,
    TokensById,
    OperatorApprovals,
    FtBalances,
    FtAllowances,
    EscrowHeld,
}

// --- Contract State ---

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub owner_id: AccountId,
    /// Receives the marketplace fee cut on every settled sale.
    pub fee_recipient: AccountId,
    pub fee_config: FeeConfig,

    /// Active listings; key = `"{nft_contract}:{token_id}"`. At most one per item.
    pub listings: IterableMap<String, Listing>,
    /// Per-buyer offers; key = `"{item_key}\0{buyer_id}"`. Funds held in escrow.
    pub offers: IterableMap<String, Offer>,
    /// Open auctions; key = `"{nft_contract}:{token_id}"`. Record presence == open.
    pub auctions: IterableMap<String, Auction>,
    /// Token contracts rejected by the policy gate.
    pub blacklist: IterableSet<AccountId>,

    /// Token ledger; key = `"{nft_contract}:{token_id}"`.
    pub tokens_by_id: IterableMap<String, TokenRecord>,
    /// Blanket operator approvals; key = `"{nft_contract}\0{owner}\0{operator}"`.
    pub operator_approvals: LookupMap<String, bool>,

    /// Fungible-currency ledger balances.
    pub ft_balances: LookupMap<AccountId, u128>,
    /// Allowances; key = `"{owner}\0{spender}"`.
    pub ft_allowances: LookupMap<String, u128>,

    /// Escrowed balances; key = `"{party}\0{pay_kind}"`.
    pub escrow_held: LookupMap<String, u128>,
    pub escrow_totals: EscrowTotals,
}

// --- Init ---

#[near]
impl Contract {
    #[init]
    pub fn new(
        owner_id: AccountId,
        fee_recipient: AccountId,
        marketplace_fee_bps: Option<u16>,
    ) -> Self {
        let fee_config = match marketplace_fee_bps {
            Some(bps) => FeeConfig {
                marketplace_fee_bps: bps,
            },
            None => FeeConfig::default(),
        };

        Self {
            owner_id,
            fee_recipient,
            fee_config,
            listings: IterableMap::new(StorageKey::Listings),
            offers: IterableMap::new(StorageKey::Offers),
            auctions: IterableMap::new(StorageKey::Auctions),
            blacklist: IterableSet::new(StorageKey::Blacklist),
            tokens_by_id: IterableMap::new(StorageKey::TokensById),
            operator_approvals: LookupMap::new(StorageKey::OperatorApprovals),
            ft_balances: LookupMap::new(StorageKey::FtBalances),
            ft_allowances: LookupMap::new(StorageKey::FtAllowances),
            escrow_held: LookupMap::new(StorageKey::EscrowHeld),
            escrow_totals: EscrowTotals::default(),
        }
    }
}
