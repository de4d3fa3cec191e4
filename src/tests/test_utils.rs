use near_sdk::test_utils::VMContextBuilder;
use near_sdk::{testing_env, AccountId};

use crate::Contract;

/// Base timestamp for every test context (nanoseconds).
pub const BASE_TS: u64 = 1_700_000_000_000_000_000;

pub fn owner() -> AccountId {
    "owner.near".parse().unwrap()
}

pub fn fee_recipient() -> AccountId {
    "treasury.near".parse().unwrap()
}

pub fn marketplace() -> AccountId {
    "market.near".parse().unwrap()
}

pub fn seller() -> AccountId {
    "alice.near".parse().unwrap()
}

pub fn buyer() -> AccountId {
    "bob.near".parse().unwrap()
}

pub fn bidder_a() -> AccountId {
    "carol.near".parse().unwrap()
}

pub fn bidder_b() -> AccountId {
    "dan.near".parse().unwrap()
}

pub fn nft_contract() -> AccountId {
    "nft.near".parse().unwrap()
}

pub fn context(predecessor: AccountId) -> VMContextBuilder {
    let mut builder = VMContextBuilder::new();
    builder
        .current_account_id(marketplace())
        .predecessor_account_id(predecessor)
        .block_timestamp(BASE_TS);
    builder
}

pub fn set_caller(predecessor: AccountId) {
    testing_env!(context(predecessor).build());
}

pub fn set_caller_at(predecessor: AccountId, timestamp: u64) {
    testing_env!(context(predecessor).block_timestamp(timestamp).build());
}

pub fn new_contract() -> Contract {
    set_caller(owner());
    Contract::new(owner(), fee_recipient(), None)
}

/// Mint `token_id` under the shared test NFT contract and grant the
/// marketplace per-token approval.
pub fn mint_and_approve(contract: &mut Contract, token_id: &str, to: &AccountId) {
    contract
        .internal_mint(&nft_contract(), token_id, to)
        .unwrap();
    contract
        .internal_approve(to, &nft_contract(), token_id, &marketplace())
        .unwrap();
}
