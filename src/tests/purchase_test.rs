use super::test_utils::*;
use crate::*;

fn listed_contract(price: u128, pay_kind: PayKind) -> Contract {
    let mut contract = new_contract();
    mint_and_approve(&mut contract, "1", &seller());
    contract
        .internal_list_item(&seller(), &nft_contract(), "1", price, pay_kind)
        .unwrap();
    contract
}

#[test]
fn test_buy_native_settles_and_transfers() {
    let mut contract = listed_contract(10_000, PayKind::Native);

    contract
        .internal_buy(&buyer(), &nft_contract(), "1", 10_000, PayKind::Native)
        .unwrap();

    assert_eq!(
        contract.owner_of(nft_contract(), "1".to_string()),
        Some(buyer())
    );
    assert!(!contract.get_item_info(nft_contract(), "1".to_string()).is_listed);

    // Everything deposited left escrow again: 9_800 to the seller, 200 fee.
    let totals = contract.get_escrow_totals();
    assert_eq!(totals.native_deposited, 10_000);
    assert_eq!(totals.native_released, 10_000);
    assert_eq!(
        contract.get_escrow_balance(buyer(), PayKind::Native),
        U128(0)
    );
}

#[test]
fn test_buy_refunds_excess_tender() {
    let mut contract = listed_contract(10_000, PayKind::Native);

    contract
        .internal_buy(&buyer(), &nft_contract(), "1", 20_000, PayKind::Native)
        .unwrap();

    let totals = contract.get_escrow_totals();
    assert_eq!(totals.native_deposited, 20_000);
    assert_eq!(totals.native_released, 20_000);
    assert_eq!(
        contract.get_escrow_balance(buyer(), PayKind::Native),
        U128(0)
    );
    assert_eq!(
        contract.owner_of(nft_contract(), "1".to_string()),
        Some(buyer())
    );
}

#[test]
fn test_buy_rejects_underpayment() {
    let mut contract = listed_contract(10_000, PayKind::Native);

    let result = contract.internal_buy(&buyer(), &nft_contract(), "1", 9_999, PayKind::Native);
    assert_eq!(result, Err(MarketplaceError::InsufficientPayment));

    // Nothing moved.
    assert!(contract.get_item_info(nft_contract(), "1".to_string()).is_listed);
    assert_eq!(
        contract.owner_of(nft_contract(), "1".to_string()),
        Some(seller())
    );
    assert_eq!(contract.get_escrow_totals().native_deposited, 0);
}

#[test]
fn test_buy_rejects_wrong_pay_kind() {
    let mut contract = listed_contract(10_000, PayKind::Native);

    let result = contract.internal_buy(&buyer(), &nft_contract(), "1", 10_000, PayKind::Fungible);
    assert_eq!(result, Err(MarketplaceError::WrongPayKind));
}

#[test]
fn test_buy_rejects_unlisted_item() {
    let mut contract = new_contract();
    mint_and_approve(&mut contract, "1", &seller());

    let result = contract.internal_buy(&buyer(), &nft_contract(), "1", 10_000, PayKind::Native);
    assert_eq!(result, Err(MarketplaceError::NotListed));
}

#[test]
fn test_buy_fungible_settles_through_ledger() {
    let mut contract = listed_contract(10_000, PayKind::Fungible);
    contract.internal_ft_credit(&buyer(), 10_000);
    set_caller(buyer());
    contract.ft_approve(marketplace(), U128(10_000));

    contract
        .internal_buy(&buyer(), &nft_contract(), "1", 10_000, PayKind::Fungible)
        .unwrap();

    assert_eq!(contract.ft_balance_of(buyer()), U128(0));
    assert_eq!(contract.ft_balance_of(seller()), U128(9_800));
    assert_eq!(contract.ft_balance_of(fee_recipient()), U128(200));
    // Custody drained once settlement completed.
    assert_eq!(contract.ft_balance_of(marketplace()), U128(0));

    let totals = contract.get_escrow_totals();
    assert_eq!(totals.fungible_deposited, 10_000);
    assert_eq!(totals.fungible_released, 10_000);
    assert_eq!(
        contract.owner_of(nft_contract(), "1".to_string()),
        Some(buyer())
    );
}

#[test]
fn test_buy_fungible_requires_allowance() {
    let mut contract = listed_contract(10_000, PayKind::Fungible);
    contract.internal_ft_credit(&buyer(), 10_000);
    // No allowance granted.

    let result = contract.internal_buy(&buyer(), &nft_contract(), "1", 10_000, PayKind::Fungible);
    assert_eq!(result, Err(MarketplaceError::InsufficientPayment));
    assert_eq!(contract.ft_balance_of(buyer()), U128(10_000));
    assert!(contract.get_item_info(nft_contract(), "1".to_string()).is_listed);
}

#[test]
fn test_buy_fungible_requires_balance() {
    let mut contract = listed_contract(10_000, PayKind::Fungible);
    contract.internal_ft_credit(&buyer(), 5_000);
    set_caller(buyer());
    contract.ft_approve(marketplace(), U128(10_000));

    let result = contract.internal_buy(&buyer(), &nft_contract(), "1", 10_000, PayKind::Fungible);
    assert_eq!(result, Err(MarketplaceError::InsufficientPayment));
    // The allowance survives a failed pull.
    assert_eq!(contract.ft_allowance(buyer(), marketplace()), U128(10_000));
    assert_eq!(contract.ft_balance_of(buyer()), U128(5_000));
}
