//! Error types for the Coffer treasury core.
//!
//! All errors use the `CF_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Crew / authorization errors
//! - 2xx: Drain registry errors
//! - 3xx: Treasury / payment errors

use thiserror::Error;

use crate::AccountId;

/// Central error enum for all Coffer operations.
///
/// Every failure aborts the whole call with no state change; the variant is
/// the reason code surfaced to the caller. There is no internal retry —
/// callers resubmit corrected input.
#[derive(Debug, Error)]
pub enum CofferError {
    // =================================================================
    // Crew / Authorization Errors (1xx)
    // =================================================================
    /// The caller is not a crew member.
    #[error("CF_ERR_100: Unauthorized: {caller} is not a crew member")]
    Unauthorized { caller: AccountId },

    /// The zero identity was supplied where a real operator is required.
    #[error("CF_ERR_101: Invalid identity: the zero address cannot be a crew member")]
    InvalidIdentity,

    // =================================================================
    // Drain Registry Errors (2xx)
    // =================================================================
    /// The zero identity was supplied as a drain target.
    #[error("CF_ERR_200: Invalid address: the zero address cannot be a drain")]
    InvalidAddress,

    /// The address is already registered as a live drain.
    #[error("CF_ERR_201: Duplicate drain: {0}")]
    DuplicateDrain(AccountId),

    /// A drain with a zero ceiling could never receive funds.
    #[error("CF_ERR_202: Zero max: a drain ceiling must be positive")]
    ZeroMax,

    /// The floor would exceed the ceiling.
    #[error("CF_ERR_203: Min exceeds max: min {min} > max {max}")]
    MinExceedsMax { min: u128, max: u128 },

    /// No live drain entry exists for the address.
    #[error("CF_ERR_204: Not a drain: {0}")]
    NotADrain(AccountId),

    // =================================================================
    // Treasury / Payment Errors (3xx)
    // =================================================================
    /// The host transfer primitive failed; the staged debit was rolled back.
    #[error("CF_ERR_300: Payment failed: {reason}")]
    PaymentFailed { reason: String },
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, CofferError>;
