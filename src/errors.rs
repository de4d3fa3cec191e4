//! Typed error handling for the marketplace contract.
//!
//! Uses `#[derive(near_sdk::FunctionError)]` from the NEAR SDK to enable
//! `#[handle_result]` on public methods. When a method returns
//! `Err(MarketplaceError::Xxx)`, the SDK calls `env::panic_str()` with the
//! Display message: the same on-wire behaviour as raw panics, but with
//! structured, testable codes. Every error leaves registries and escrow
//! balances exactly as they were before the call.

use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(borsh, json)]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MarketplaceError {
    // --- Authorization ---
    /// Caller is not the owner required for this action.
    NotOwner,
    /// Marketplace has no transfer approval for the token.
    NotApproved,
    /// Token owner may not open an offer on their own token.
    OwnerCannotOffer,
    /// Auction seller may not bid on their own auction.
    OwnerCannotBid,

    // --- State conflict ---
    /// No active listing for this item.
    NotListed,
    /// An open auction already exists for this item.
    AuctionExists,
    /// No open auction for this item.
    AuctionDoesNotExist,
    /// Caller already holds a live offer on this item.
    DuplicateOffer,
    /// Caller already holds the highest bid and must cancel it first.
    MustCancelPrevious,
    /// Offer was already withdrawn by its creator.
    AlreadyWithdrawn,
    /// No offer record for this (item, buyer) pair.
    OfferDoesNotExist,
    /// Caller is not the current highest bidder.
    NotHighestBidder,
    /// Auction with an outstanding bid cannot be cancelled by the seller.
    AuctionHasBid,
    /// No token record under this identity.
    TokenNotFound,

    // --- Temporal ---
    /// Offer expiry has passed.
    OfferExpired,
    /// Auction end time has passed.
    AuctionEnded,
    /// Highest bid can no longer be withdrawn once the auction has ended.
    TooLateToCancel,

    // --- Payment ---
    /// Tendered amount is below the required price or bid.
    InsufficientPayment,
    /// Payment kind does not match the listing terms.
    WrongPayKind,

    // --- Policy ---
    /// Token contract is rejected by the blacklist gate.
    Blacklisted,
    /// Price or amount must be greater than zero.
    InvalidPrice,
    /// Parallel input arrays must have equal length.
    LengthMismatch,
    /// Blanket marketplace approval is required before batch listing.
    ApprovalRequired,
}

impl std::fmt::Display for MarketplaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::NotOwner => "Caller is not the owner",
            Self::NotApproved => "Marketplace is not approved to transfer this token",
            Self::OwnerCannotOffer => "Owner cannot create an offer on their own token",
            Self::OwnerCannotBid => "Owner cannot place a bid on their own auction",
            Self::NotListed => "Token is not listed on the marketplace",
            Self::AuctionExists => "An open auction already exists for this token",
            Self::AuctionDoesNotExist => "Auction does not exist",
            Self::DuplicateOffer => "A live offer from this account already exists",
            Self::MustCancelPrevious => "Cancel the previous bid before bidding again",
            Self::AlreadyWithdrawn => "Offer has already been withdrawn",
            Self::OfferDoesNotExist => "Offer does not exist",
            Self::NotHighestBidder => "Caller is not the current highest bidder",
            Self::AuctionHasBid => "Cannot cancel an auction that already has a bid",
            Self::TokenNotFound => "Token not found",
            Self::OfferExpired => "Offer has expired",
            Self::AuctionEnded => "Auction has ended",
            Self::TooLateToCancel => "Bid cannot be cancelled after the auction has ended",
            Self::InsufficientPayment => "Payment amount is lower than required",
            Self::WrongPayKind => "Payment kind does not match the listing",
            Self::Blacklisted => "Token contract is blacklisted",
            Self::InvalidPrice => "Price must be greater than zero",
            Self::LengthMismatch => "Input arrays must have equal length",
            Self::ApprovalRequired => "Approve the marketplace for all tokens first",
        };
        write!(f, "{}", msg)
    }
}
