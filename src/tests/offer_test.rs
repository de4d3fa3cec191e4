use super::test_utils::*;
use crate::*;

fn contract_with_token() -> Contract {
    let mut contract = new_contract();
    mint_and_approve(&mut contract, "1", &seller());
    contract
}

#[test]
fn test_owner_cannot_offer_on_own_token() {
    let mut contract = contract_with_token();
    let result = contract.internal_make_offer(&seller(), &nft_contract(), "1", 1_000, 3_600);
    assert_eq!(result, Err(MarketplaceError::OwnerCannotOffer));
}

#[test]
fn test_offer_requires_existing_token() {
    let mut contract = new_contract();
    let result = contract.internal_make_offer(&buyer(), &nft_contract(), "404", 1_000, 3_600);
    assert_eq!(result, Err(MarketplaceError::TokenNotFound));
}

#[test]
fn test_offer_rejects_zero_amount() {
    let mut contract = contract_with_token();
    let result = contract.internal_make_offer(&buyer(), &nft_contract(), "1", 0, 3_600);
    assert_eq!(result, Err(MarketplaceError::InvalidPrice));
}

#[test]
fn test_make_offer_escrows_funds() {
    let mut contract = contract_with_token();
    contract
        .internal_make_offer(&buyer(), &nft_contract(), "1", 1_000, 3_600)
        .unwrap();

    assert_eq!(
        contract.get_escrow_balance(buyer(), PayKind::Native),
        U128(1_000)
    );
    let view = contract
        .get_offer(nft_contract(), "1".to_string(), buyer())
        .unwrap();
    assert_eq!(view.amount, U128(1_000));
    assert_eq!(view.expires_at, BASE_TS + 3_600 * NANOS_PER_SEC);
    assert!(!view.withdrawn);
    assert_eq!(
        contract
            .get_offers_for_token(nft_contract(), "1".to_string())
            .len(),
        1
    );
}

#[test]
fn test_live_offer_blocks_duplicate() {
    let mut contract = contract_with_token();
    contract
        .internal_make_offer(&buyer(), &nft_contract(), "1", 1_000, 3_600)
        .unwrap();

    let result = contract.internal_make_offer(&buyer(), &nft_contract(), "1", 2_000, 3_600);
    assert_eq!(result, Err(MarketplaceError::DuplicateOffer));
    assert_eq!(
        contract.get_escrow_balance(buyer(), PayKind::Native),
        U128(1_000)
    );
}

#[test]
fn test_cancel_offer_releases_escrow_once() {
    let mut contract = contract_with_token();
    contract
        .internal_make_offer(&buyer(), &nft_contract(), "1", 1_000, 3_600)
        .unwrap();

    contract
        .internal_cancel_offer(&buyer(), &nft_contract(), "1")
        .unwrap();
    assert_eq!(
        contract.get_escrow_balance(buyer(), PayKind::Native),
        U128(0)
    );
    let totals = contract.get_escrow_totals();
    assert_eq!(totals.native_released, 1_000);

    let result = contract.internal_cancel_offer(&buyer(), &nft_contract(), "1");
    assert_eq!(result, Err(MarketplaceError::AlreadyWithdrawn));
}

#[test]
fn test_cancel_missing_offer() {
    let mut contract = contract_with_token();
    let result = contract.internal_cancel_offer(&buyer(), &nft_contract(), "1");
    assert_eq!(result, Err(MarketplaceError::OfferDoesNotExist));
}

#[test]
fn test_accept_offer_settles_and_transfers() {
    let mut contract = contract_with_token();
    contract
        .internal_make_offer(&buyer(), &nft_contract(), "1", 10_000, 3_600)
        .unwrap();

    contract
        .internal_accept_offer(&seller(), &nft_contract(), "1", &buyer())
        .unwrap();

    assert_eq!(
        contract.owner_of(nft_contract(), "1".to_string()),
        Some(buyer())
    );
    assert!(contract
        .get_offer(nft_contract(), "1".to_string(), buyer())
        .is_none());
    let totals = contract.get_escrow_totals();
    assert_eq!(totals.native_deposited, 10_000);
    assert_eq!(totals.native_released, 10_000);
}

#[test]
fn test_accept_requires_current_owner() {
    let mut contract = contract_with_token();
    contract
        .internal_make_offer(&buyer(), &nft_contract(), "1", 1_000, 3_600)
        .unwrap();

    let result = contract.internal_accept_offer(&bidder_a(), &nft_contract(), "1", &buyer());
    assert_eq!(result, Err(MarketplaceError::NotOwner));
}

#[test]
fn test_expired_offer_cannot_be_accepted_but_cancel_recovers() {
    let mut contract = contract_with_token();
    contract
        .internal_make_offer(&buyer(), &nft_contract(), "1", 1_000, 5)
        .unwrap();

    set_caller_at(seller(), BASE_TS + 5 * NANOS_PER_SEC);
    let result = contract.internal_accept_offer(&seller(), &nft_contract(), "1", &buyer());
    assert_eq!(result, Err(MarketplaceError::OfferExpired));

    // Funds stay reclaimable after expiry.
    contract
        .internal_cancel_offer(&buyer(), &nft_contract(), "1")
        .unwrap();
    assert_eq!(
        contract.get_escrow_balance(buyer(), PayKind::Native),
        U128(0)
    );
}

#[test]
fn test_replacing_expired_offer_refunds_old_escrow() {
    let mut contract = contract_with_token();
    contract
        .internal_make_offer(&buyer(), &nft_contract(), "1", 100, 5)
        .unwrap();

    set_caller_at(buyer(), BASE_TS + 6 * NANOS_PER_SEC);
    contract
        .internal_make_offer(&buyer(), &nft_contract(), "1", 150, 3_600)
        .unwrap();

    assert_eq!(
        contract.get_escrow_balance(buyer(), PayKind::Native),
        U128(150)
    );
    let totals = contract.get_escrow_totals();
    assert_eq!(totals.native_deposited, 250);
    assert_eq!(totals.native_released, 100);
}

#[test]
fn test_offers_from_two_buyers_coexist() {
    let mut contract = contract_with_token();
    contract
        .internal_make_offer(&buyer(), &nft_contract(), "1", 1_000, 3_600)
        .unwrap();
    contract
        .internal_make_offer(&bidder_a(), &nft_contract(), "1", 2_000, 3_600)
        .unwrap();

    assert_eq!(
        contract
            .get_offers_for_token(nft_contract(), "1".to_string())
            .len(),
        2
    );

    // Accepting one leaves the other intact and still funded.
    contract
        .internal_accept_offer(&seller(), &nft_contract(), "1", &bidder_a())
        .unwrap();
    assert_eq!(
        contract.get_escrow_balance(buyer(), PayKind::Native),
        U128(1_000)
    );
    contract
        .internal_cancel_offer(&buyer(), &nft_contract(), "1")
        .unwrap();
}
