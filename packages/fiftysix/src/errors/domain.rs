//! Engine-level error type used across all rules operations.
//!
//! Every rejected action is recoverable at the call site: the caller
//! re-prompts or rejects the input, and the engine state is unchanged.

use thiserror::Error;

/// Discriminates the rule or check an action violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Rank token outside the 9/T/J/Q/K/A set.
    InvalidRank,
    /// Deck handed to the dealer did not hold exactly 48 cards.
    InsufficientCards,
    /// Out-of-range or non-raising bid, or an action from a seat that
    /// already passed.
    IllegalBid,
    /// Trump token outside the 4 valid suits.
    InvalidTrumpSuit,
    /// Follow-suit violation (a revoke).
    MustFollowSuit,
    /// Move submitted by a seat whose turn it is not.
    OutOfTurn,
    /// Operation attempted before the round reached the required phase,
    /// e.g. playing a card before trump is declared.
    RoundNotReady,
    /// Card played that the seat does not hold.
    CardNotInHand,
    /// Operation not valid in the current phase at all.
    PhaseMismatch,
    ParseCard,
}

/// Central engine error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input validation or rule violation, always recoverable.
    #[error("validation {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Internal invariant violation; indicates a bug in the caller or
    /// the engine, never a bad player move.
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// The validation kind, if this is a validation error.
    pub fn kind(&self) -> Option<ValidationKind> {
        match self {
            Self::Validation(kind, _) => Some(*kind),
            Self::Invariant(_) => None,
        }
    }
}
