//! Sale domain types.

use near_sdk::json_types::U128;
use near_sdk::near;
use near_sdk::AccountId;

/// Currency accepted for a sale: the native coin or the designated
/// fungible token.
#[near(serializers = [borsh, json])]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PayKind {
    Native,
    Fungible,
}

impl PayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayKind::Native => "native",
            PayKind::Fungible => "fungible",
        }
    }
}

/// Fixed-price sale terms for one item. Active while the record exists;
/// cleared on cancel or successful sale, overwritten on relist.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Listing {
    pub seller: AccountId,
    /// Always > 0 while listed.
    pub price: u128,
    pub pay_kind: PayKind,
    pub created_at: u64,
}

/// View projection of the current listing state for an item (JSON-only).
/// Absent listings report inactive terms rather than an error.
#[near(serializers = [json])]
pub struct ItemInfo {
    pub is_listed: bool,
    pub price: U128,
    pub pay_kind: Option<PayKind>,
    pub seller: Option<AccountId>,
}
