//! Marketplace-wide constants.

use near_sdk::NearToken;

/// Basis points denominator (10,000 = 100%).
pub const BASIS_POINTS: u16 = 10_000;

/// Default marketplace fee in basis points (200 = 2.0%).
pub const DEFAULT_MARKETPLACE_FEE_BPS: u16 = 200;

/// Upper bound for the configurable marketplace fee (1000 = 10%).
pub const MAX_MARKETPLACE_FEE_BPS: u16 = 1_000;

/// Delimiter for composite item keys.
/// ":" is not a valid character in NEAR account IDs, preventing key collisions.
pub const DELIMETER: &str = ":";

/// Maximum number of items accepted by a single `batch_list` call.
pub const MAX_BATCH_LIST: usize = 20;

/// Nanoseconds per second; TTLs and auction durations arrive in seconds.
pub const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Exact deposit required on owner-initiated settlement calls.
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);
